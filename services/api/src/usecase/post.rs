use chrono::Utc;
use uuid::Uuid;

use vinipim_domain::post::Post;

use crate::authz::{Principal, require_admin};
use crate::domain::repository::PostRepository;
use crate::domain::types::{CreatePostInput, UpdatePostInput};
use crate::error::ApiError;

pub struct ListPostsUseCase<P: PostRepository> {
    pub posts: P,
}

impl<P: PostRepository> ListPostsUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Post>, ApiError> {
        self.posts.list().await
    }
}

pub struct GetPostBySlugUseCase<P: PostRepository> {
    pub posts: P,
}

impl<P: PostRepository> GetPostBySlugUseCase<P> {
    pub async fn execute(&self, slug: &str) -> Result<Post, ApiError> {
        self.posts
            .find_by_slug(slug)
            .await?
            .ok_or(ApiError::PostNotFound)
    }
}

pub struct CreatePostUseCase<P: PostRepository> {
    pub posts: P,
}

impl<P: PostRepository> CreatePostUseCase<P> {
    /// Returns the new post id.
    pub async fn execute(
        &self,
        principal: &Principal,
        input: CreatePostInput,
    ) -> Result<String, ApiError> {
        require_admin(principal)?;
        input.validate()?;

        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4().to_string(),
            slug: input.slug,
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            cover_image: input.cover_image,
            category: input.category,
            featured: input.featured,
            published_at: now,
            updated_at: now,
            author_id: Some(principal.id().to_owned()),
        };
        self.posts.create(&post).await?;
        Ok(post.id)
    }
}

pub struct UpdatePostUseCase<P: PostRepository> {
    pub posts: P,
}

impl<P: PostRepository> UpdatePostUseCase<P> {
    pub async fn execute(&self, principal: &Principal, input: UpdatePostInput) -> Result<(), ApiError> {
        require_admin(principal)?;
        input.validate()?;

        if self.posts.update(&input.id, &input.changes, Utc::now()).await? {
            Ok(())
        } else {
            Err(ApiError::PostNotFound)
        }
    }
}

pub struct DeletePostUseCase<P: PostRepository> {
    pub posts: P,
}

impl<P: PostRepository> DeletePostUseCase<P> {
    pub async fn execute(&self, principal: &Principal, id: &str) -> Result<(), ApiError> {
        require_admin(principal)?;

        if self.posts.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::PostNotFound)
        }
    }
}
