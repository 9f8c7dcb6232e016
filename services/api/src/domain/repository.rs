//! Storage ports.
//!
//! Methods return `impl Future + Send` so handlers generic over
//! [`Repositories`] stay `Send`. Implementations may use `async fn`.
//! Every method returns [`ApiError::DatabaseUnavailable`] when the datastore
//! could not be opened at startup; callers decide how to degrade.

use std::future::Future;

use chrono::{DateTime, Utc};

use vinipim_domain::admin::AdminCredential;
use vinipim_domain::media::Media;
use vinipim_domain::post::Post;
use vinipim_domain::review::Review;
use vinipim_domain::user::User;

use crate::domain::types::{PostChanges, ReviewChanges, ReviewListInput, UpsertUser};
use crate::error::ApiError;

/// Password-login admin credentials.
pub trait AdminRepository: Send + Sync {
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<AdminCredential>, ApiError>> + Send;

    fn touch_last_login(
        &self,
        id: &str,
        at: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Overwrite the email of the credential currently holding `current_email`.
    fn update_email(
        &self,
        current_email: &str,
        new_email: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Insert, or on duplicate email overwrite `password_hash` and `name`.
    fn upsert(
        &self,
        credential: &AdminCredential,
    ) -> impl Future<Output = Result<AdminCredential, ApiError>> + Send;
}

/// OAuth-derived users.
pub trait UserRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> impl Future<Output = Result<Option<User>, ApiError>> + Send;

    fn upsert(&self, user: &UpsertUser) -> impl Future<Output = Result<User, ApiError>> + Send;
}

pub trait PostRepository: Send + Sync {
    /// All posts, oldest `published_at` first.
    fn list(&self) -> impl Future<Output = Result<Vec<Post>, ApiError>> + Send;

    fn find_by_slug(&self, slug: &str)
    -> impl Future<Output = Result<Option<Post>, ApiError>> + Send;

    fn create(&self, post: &Post) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Returns `false` when no post has `id`.
    fn update(
        &self,
        id: &str,
        changes: &PostChanges,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<bool, ApiError>> + Send;

    /// Returns `false` when no post has `id`.
    fn delete(&self, id: &str) -> impl Future<Output = Result<bool, ApiError>> + Send;
}

pub trait ReviewRepository: Send + Sync {
    fn list(
        &self,
        query: &ReviewListInput,
    ) -> impl Future<Output = Result<Vec<Review>, ApiError>> + Send;

    fn find_by_id(&self, id: &str) -> impl Future<Output = Result<Option<Review>, ApiError>> + Send;

    fn create(&self, review: &Review) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn update(
        &self,
        id: &str,
        changes: &ReviewChanges,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<bool, ApiError>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<bool, ApiError>> + Send;
}

pub trait MediaRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Media>, ApiError>> + Send;

    fn create(&self, media: &Media) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<bool, ApiError>> + Send;
}

/// Factory for every repository the API needs, held in `AppState`.
pub trait Repositories: Clone + Send + Sync + 'static {
    type Admins: AdminRepository + 'static;
    type Users: UserRepository + 'static;
    type Posts: PostRepository + 'static;
    type Reviews: ReviewRepository + 'static;
    type Media: MediaRepository + 'static;

    fn admins(&self) -> Self::Admins;
    fn users(&self) -> Self::Users;
    fn posts(&self) -> Self::Posts;
    fn reviews(&self) -> Self::Reviews;
    fn media(&self) -> Self::Media;

    /// Whether the datastore answers right now.
    fn ping(&self) -> impl Future<Output = bool> + Send;
}
