use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use vinipim_core::health::healthz;
use vinipim_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::domain::repository::Repositories;
use crate::handlers::{admin, auth, health, media, oauth, posts, reviews, system, upload};
use crate::state::AppState;

/// Queries are `GET` with input in the query string; mutations are `POST`
/// with a JSON body.
pub fn build_router<R: Repositories>(state: AppState<R>) -> Router {
    Router::new()
        // Health
        .route("/", get(health::root))
        .route("/healthz", get(healthz))
        .route("/readyz", get(health::readyz::<R>))
        // OAuth
        .route("/api/oauth/callback", get(oauth::callback::<R>))
        // Admin
        .route("/api/trpc/admin.login", post(admin::login::<R>))
        .route("/api/trpc/admin.me", get(admin::me::<R>))
        .route("/api/trpc/admin.logout", post(admin::logout))
        .route("/api/trpc/admin.updateEmail", post(admin::update_email::<R>))
        .route("/api/trpc/admin.updatePassword", post(admin::update_password::<R>))
        // Session
        .route("/api/trpc/auth.me", get(auth::me))
        .route("/api/trpc/auth.logout", post(auth::logout))
        // Posts
        .route("/api/trpc/posts.getAll", get(posts::get_all::<R>))
        .route("/api/trpc/posts.getBySlug", get(posts::get_by_slug::<R>))
        .route("/api/trpc/posts.create", post(posts::create::<R>))
        .route("/api/trpc/posts.update", post(posts::update::<R>))
        .route("/api/trpc/posts.delete", post(posts::delete::<R>))
        // Reviews
        .route("/api/trpc/reviews.list", get(reviews::list::<R>))
        .route("/api/trpc/reviews.getById", get(reviews::get_by_id::<R>))
        .route("/api/trpc/reviews.stats", get(reviews::stats::<R>))
        .route("/api/trpc/reviews.create", post(reviews::create::<R>))
        .route("/api/trpc/reviews.update", post(reviews::update::<R>))
        .route("/api/trpc/reviews.delete", post(reviews::delete::<R>))
        // Media
        .route("/api/trpc/media.getAll", get(media::get_all::<R>))
        .route("/api/trpc/media.create", post(media::create::<R>))
        .route("/api/trpc/media.delete", post(media::delete::<R>))
        // Upload
        .route("/api/trpc/upload.getUploadUrl", post(upload::get_upload_url::<R>))
        // System
        .route("/api/trpc/system.health", get(system::health))
        .route("/api/trpc/system.notifyOwner", post(system::notify_owner))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
