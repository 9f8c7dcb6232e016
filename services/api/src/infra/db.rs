use anyhow::{Context as _, anyhow};
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder,
};

use vinipim_api_schema::{admin_credentials, media, posts, reviews, users};
use vinipim_core::db::Datastore;
use vinipim_domain::admin::AdminCredential;
use vinipim_domain::media::Media;
use vinipim_domain::post::Post;
use vinipim_domain::review::{Review, ReviewSort, SortOrder};
use vinipim_domain::user::User;

use crate::domain::repository::{
    AdminRepository, MediaRepository, PostRepository, Repositories, ReviewRepository,
    UserRepository,
};
use crate::domain::types::{PostChanges, ReviewChanges, ReviewListInput, UpsertUser};
use crate::error::ApiError;

// ── Bundle ────────────────────────────────────────────────────────────────────

/// sea-orm backed repositories over the shared [`Datastore`].
#[derive(Clone)]
pub struct DbRepositories {
    pub store: Datastore,
}

impl Repositories for DbRepositories {
    type Admins = DbAdminRepository;
    type Users = DbUserRepository;
    type Posts = DbPostRepository;
    type Reviews = DbReviewRepository;
    type Media = DbMediaRepository;

    fn admins(&self) -> Self::Admins {
        DbAdminRepository {
            store: self.store.clone(),
        }
    }

    fn users(&self) -> Self::Users {
        DbUserRepository {
            store: self.store.clone(),
        }
    }

    fn posts(&self) -> Self::Posts {
        DbPostRepository {
            store: self.store.clone(),
        }
    }

    fn reviews(&self) -> Self::Reviews {
        DbReviewRepository {
            store: self.store.clone(),
        }
    }

    fn media(&self) -> Self::Media {
        DbMediaRepository {
            store: self.store.clone(),
        }
    }

    async fn ping(&self) -> bool {
        self.store.ping().await
    }
}

// ── Admin credentials ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminRepository {
    pub store: Datastore,
}

impl AdminRepository for DbAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminCredential>, ApiError> {
        let db = self.store.connection()?;
        let model = admin_credentials::Entity::find()
            .filter(admin_credentials::Column::Email.eq(email))
            .one(db)
            .await
            .context("find admin by email")?;
        Ok(model.map(admin_from_model))
    }

    async fn touch_last_login(&self, id: &str, at: DateTime<Utc>) -> Result<(), ApiError> {
        let db = self.store.connection()?;
        admin_credentials::Entity::update_many()
            .col_expr(admin_credentials::Column::LastLogin, Expr::value(at))
            .filter(admin_credentials::Column::Id.eq(id))
            .exec(db)
            .await
            .context("touch admin last login")?;
        Ok(())
    }

    async fn update_email(&self, current_email: &str, new_email: &str) -> Result<(), ApiError> {
        let db = self.store.connection()?;
        admin_credentials::Entity::update_many()
            .col_expr(admin_credentials::Column::Email, Expr::value(new_email))
            .filter(admin_credentials::Column::Email.eq(current_email))
            .exec(db)
            .await
            .context("update admin email")?;
        Ok(())
    }

    async fn update_password_hash(&self, email: &str, password_hash: &str) -> Result<(), ApiError> {
        let db = self.store.connection()?;
        admin_credentials::Entity::update_many()
            .col_expr(
                admin_credentials::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .filter(admin_credentials::Column::Email.eq(email))
            .exec(db)
            .await
            .context("update admin password")?;
        Ok(())
    }

    async fn upsert(&self, credential: &AdminCredential) -> Result<AdminCredential, ApiError> {
        let db = self.store.connection()?;
        admin_credentials::Entity::insert(admin_credentials::ActiveModel {
            id: Set(credential.id.clone()),
            email: Set(credential.email.clone()),
            password_hash: Set(credential.password_hash.clone()),
            name: Set(credential.name.clone()),
            created_at: Set(credential.created_at),
            last_login: Set(credential.last_login),
        })
        .on_conflict(
            OnConflict::column(admin_credentials::Column::Email)
                .update_columns([
                    admin_credentials::Column::PasswordHash,
                    admin_credentials::Column::Name,
                ])
                .to_owned(),
        )
        .exec(db)
        .await
        .context("upsert admin credential")?;

        self.find_by_email(&credential.email)
            .await?
            .ok_or_else(|| anyhow!("admin credential missing after upsert").into())
    }
}

fn admin_from_model(model: admin_credentials::Model) -> AdminCredential {
    AdminCredential {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        name: model.name,
        created_at: model.created_at,
        last_login: model.last_login,
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub store: Datastore,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        let db = self.store.connection()?;
        let model = users::Entity::find_by_id(id.to_owned())
            .one(db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model).transpose()?)
    }

    async fn upsert(&self, user: &UpsertUser) -> Result<User, ApiError> {
        let db = self.store.connection()?;

        // Only provided fields overwrite an existing row.
        let mut update = vec![users::Column::LastSignedIn];
        if user.name.is_some() {
            update.push(users::Column::Name);
        }
        if user.email.is_some() {
            update.push(users::Column::Email);
        }
        if user.login_method.is_some() {
            update.push(users::Column::LoginMethod);
        }
        if user.role.is_some() {
            update.push(users::Column::Role);
        }

        users::Entity::insert(users::ActiveModel {
            id: Set(user.open_id.clone()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            login_method: Set(user.login_method.clone()),
            role: Set(user.role.unwrap_or_default().as_str().to_owned()),
            created_at: Set(user.last_signed_in),
            last_signed_in: Set(user.last_signed_in),
        })
        .on_conflict(
            OnConflict::column(users::Column::Id)
                .update_columns(update)
                .to_owned(),
        )
        .exec(db)
        .await
        .context("upsert user")?;

        self.find_by_id(&user.open_id)
            .await?
            .ok_or_else(|| anyhow!("user missing after upsert").into())
    }
}

fn user_from_model(model: users::Model) -> anyhow::Result<User> {
    Ok(User {
        role: model
            .role
            .parse()
            .with_context(|| format!("user {}", model.id))?,
        id: model.id,
        name: model.name,
        email: model.email,
        login_method: model.login_method,
        created_at: model.created_at,
        last_signed_in: model.last_signed_in,
    })
}

// ── Posts ─────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPostRepository {
    pub store: Datastore,
}

impl PostRepository for DbPostRepository {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        let db = self.store.connection()?;
        let models = posts::Entity::find()
            .order_by_asc(posts::Column::PublishedAt)
            .all(db)
            .await
            .context("list posts")?;
        Ok(models
            .into_iter()
            .map(post_from_model)
            .collect::<anyhow::Result<_>>()?)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, ApiError> {
        let db = self.store.connection()?;
        let model = posts::Entity::find()
            .filter(posts::Column::Slug.eq(slug))
            .one(db)
            .await
            .context("find post by slug")?;
        Ok(model.map(post_from_model).transpose()?)
    }

    async fn create(&self, post: &Post) -> Result<(), ApiError> {
        let db = self.store.connection()?;
        posts::Entity::insert(posts::ActiveModel {
            id: Set(post.id.clone()),
            slug: Set(post.slug.clone()),
            title: Set(post.title.clone()),
            excerpt: Set(post.excerpt.clone()),
            content: Set(post.content.clone()),
            cover_image: Set(post.cover_image.clone()),
            category: Set(post.category.clone()),
            featured: Set(post.featured.as_str().to_owned()),
            published_at: Set(post.published_at),
            updated_at: Set(post.updated_at),
            author_id: Set(post.author_id.clone()),
        })
        .exec_without_returning(db)
        .await
        .context("insert post")?;
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        changes: &PostChanges,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, ApiError> {
        let db = self.store.connection()?;
        let active = posts::ActiveModel {
            id: NotSet,
            slug: changes.slug.clone().map_or(NotSet, Set),
            title: changes.title.clone().map_or(NotSet, Set),
            excerpt: changes.excerpt.clone().map_or(NotSet, |v| Set(Some(v))),
            content: changes.content.clone().map_or(NotSet, Set),
            cover_image: changes.cover_image.clone().map_or(NotSet, |v| Set(Some(v))),
            category: changes.category.clone().map_or(NotSet, Set),
            featured: changes
                .featured
                .map_or(NotSet, |f| Set(f.as_str().to_owned())),
            published_at: NotSet,
            updated_at: Set(updated_at),
            author_id: NotSet,
        };
        let result = posts::Entity::update_many()
            .set(active)
            .filter(posts::Column::Id.eq(id))
            .exec(db)
            .await
            .context("update post")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, ApiError> {
        let db = self.store.connection()?;
        let result = posts::Entity::delete_by_id(id.to_owned())
            .exec(db)
            .await
            .context("delete post")?;
        Ok(result.rows_affected > 0)
    }
}

fn post_from_model(model: posts::Model) -> anyhow::Result<Post> {
    Ok(Post {
        featured: model
            .featured
            .parse()
            .with_context(|| format!("post {}", model.id))?,
        id: model.id,
        slug: model.slug,
        title: model.title,
        excerpt: model.excerpt,
        content: model.content,
        cover_image: model.cover_image,
        category: model.category,
        published_at: model.published_at,
        updated_at: model.updated_at,
        author_id: model.author_id,
    })
}

// ── Reviews ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub store: Datastore,
}

impl ReviewRepository for DbReviewRepository {
    async fn list(&self, query: &ReviewListInput) -> Result<Vec<Review>, ApiError> {
        let db = self.store.connection()?;

        let mut select = reviews::Entity::find();
        if let Some(kind) = query.kind() {
            select = select.filter(reviews::Column::Kind.eq(kind.as_str()));
        }
        let column = match query.sort_by {
            ReviewSort::Date => reviews::Column::CreatedAt,
            ReviewSort::Rating => reviews::Column::Rating,
            ReviewSort::Title => reviews::Column::Title,
        };
        let order = match query.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let models = select
            .order_by(column, order)
            .all(db)
            .await
            .context("list reviews")?;
        Ok(models
            .into_iter()
            .map(review_from_model)
            .collect::<anyhow::Result<_>>()?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, ApiError> {
        let db = self.store.connection()?;
        let model = reviews::Entity::find_by_id(id.to_owned())
            .one(db)
            .await
            .context("find review by id")?;
        Ok(model.map(review_from_model).transpose()?)
    }

    async fn create(&self, review: &Review) -> Result<(), ApiError> {
        let db = self.store.connection()?;
        reviews::Entity::insert(reviews::ActiveModel {
            id: Set(review.id.clone()),
            kind: Set(review.kind.as_str().to_owned()),
            title: Set(review.title.clone()),
            creator: Set(review.creator.clone()),
            year: Set(review.year),
            rating: Set(review.rating),
            notes: Set(review.notes.clone()),
            tags: Set(review.tags.as_ref().map(|tags| serde_json::json!(tags))),
            cover_image: Set(review.cover_image.clone()),
            api_id: Set(review.api_id.clone()),
            metadata: Set(review.metadata.clone()),
            created_at: Set(review.created_at),
            updated_at: Set(review.updated_at),
            user_id: Set(review.user_id.clone()),
        })
        .exec_without_returning(db)
        .await
        .context("insert review")?;
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        changes: &ReviewChanges,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, ApiError> {
        let db = self.store.connection()?;
        let active = reviews::ActiveModel {
            title: changes.title.clone().map_or(NotSet, Set),
            creator: changes.creator.clone().map_or(NotSet, |v| Set(Some(v))),
            year: changes.year.map_or(NotSet, |v| Set(Some(v))),
            rating: changes.rating.map_or(NotSet, Set),
            notes: changes.notes.clone().map_or(NotSet, |v| Set(Some(v))),
            tags: changes
                .tags
                .as_ref()
                .map_or(NotSet, |tags| Set(Some(serde_json::json!(tags)))),
            cover_image: changes.cover_image.clone().map_or(NotSet, |v| Set(Some(v))),
            updated_at: Set(updated_at),
            ..Default::default()
        };
        let result = reviews::Entity::update_many()
            .set(active)
            .filter(reviews::Column::Id.eq(id))
            .exec(db)
            .await
            .context("update review")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, ApiError> {
        let db = self.store.connection()?;
        let result = reviews::Entity::delete_by_id(id.to_owned())
            .exec(db)
            .await
            .context("delete review")?;
        Ok(result.rows_affected > 0)
    }
}

fn review_from_model(model: reviews::Model) -> anyhow::Result<Review> {
    let tags = model
        .tags
        .map(serde_json::from_value::<Vec<String>>)
        .transpose()
        .with_context(|| format!("review {} tags", model.id))?;
    Ok(Review {
        kind: model
            .kind
            .parse()
            .with_context(|| format!("review {}", model.id))?,
        id: model.id,
        title: model.title,
        creator: model.creator,
        year: model.year,
        rating: model.rating,
        notes: model.notes,
        tags,
        cover_image: model.cover_image,
        api_id: model.api_id,
        metadata: model.metadata,
        created_at: model.created_at,
        updated_at: model.updated_at,
        user_id: model.user_id,
    })
}

// ── Media ─────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMediaRepository {
    pub store: Datastore,
}

impl MediaRepository for DbMediaRepository {
    async fn list(&self) -> Result<Vec<Media>, ApiError> {
        let db = self.store.connection()?;
        let models = media::Entity::find()
            .order_by_desc(media::Column::CreatedAt)
            .all(db)
            .await
            .context("list media")?;
        Ok(models
            .into_iter()
            .map(media_from_model)
            .collect::<anyhow::Result<_>>()?)
    }

    async fn create(&self, record: &Media) -> Result<(), ApiError> {
        let db = self.store.connection()?;
        media::Entity::insert(media::ActiveModel {
            id: Set(record.id.clone()),
            filename: Set(record.filename.clone()),
            file_type: Set(record.file_type.as_str().to_owned()),
            content_type: Set(record.content_type.clone()),
            size: Set(record.size),
            storage_key: Set(record.storage_key.clone()),
            url: Set(record.url.clone()),
            thumbnail: Set(record.thumbnail.clone()),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
            user_id: Set(record.user_id.clone()),
        })
        .exec_without_returning(db)
        .await
        .context("insert media")?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, ApiError> {
        let db = self.store.connection()?;
        let result = media::Entity::delete_by_id(id.to_owned())
            .exec(db)
            .await
            .context("delete media")?;
        Ok(result.rows_affected > 0)
    }
}

fn media_from_model(model: media::Model) -> anyhow::Result<Media> {
    Ok(Media {
        file_type: model
            .file_type
            .parse()
            .with_context(|| format!("media {}", model.id))?,
        id: model.id,
        filename: model.filename,
        content_type: model.content_type,
        size: model.size,
        storage_key: model.storage_key,
        url: model.url,
        thumbnail: model.thumbnail,
        created_at: model.created_at,
        updated_at: model.updated_at,
        user_id: model.user_id,
    })
}
