use crate::domain::repository::Repositories;
use crate::infra::oauth::OAuthClient;
use crate::infra::storage::StorageClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState<R: Repositories> {
    pub repos: R,
    pub jwt_secret: String,
    pub owner_open_id: String,
    pub oauth: OAuthClient,
    pub storage: StorageClient,
}

impl<R: Repositories> AppState<R> {
    pub fn admin_repo(&self) -> R::Admins {
        self.repos.admins()
    }

    pub fn user_repo(&self) -> R::Users {
        self.repos.users()
    }

    pub fn post_repo(&self) -> R::Posts {
        self.repos.posts()
    }

    pub fn review_repo(&self) -> R::Reviews {
        self.repos.reviews()
    }

    pub fn media_repo(&self) -> R::Media {
        self.repos.media()
    }
}
