use axum::{Json, extract::State, response::IntoResponse};

use vinipim_domain::post::Post;

use crate::domain::repository::Repositories;
use crate::domain::types::{CreatePostInput, IdInput, SlugInput, UpdatePostInput};
use crate::error::ApiError;
use crate::extract::{Input, Protected, QueryInput};
use crate::handlers::{created, success};
use crate::state::AppState;
use crate::usecase::post::{
    CreatePostUseCase, DeletePostUseCase, GetPostBySlugUseCase, ListPostsUseCase,
    UpdatePostUseCase,
};

// ── GET posts.getAll ──────────────────────────────────────────────────────────

pub async fn get_all<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = ListPostsUseCase {
        posts: state.post_repo(),
    }
    .execute()
    .await?;
    Ok(Json(posts))
}

// ── GET posts.getBySlug ───────────────────────────────────────────────────────

pub async fn get_by_slug<R: Repositories>(
    State(state): State<AppState<R>>,
    QueryInput(input): QueryInput<SlugInput>,
) -> Result<Json<Post>, ApiError> {
    let post = GetPostBySlugUseCase {
        posts: state.post_repo(),
    }
    .execute(&input.slug)
    .await?;
    Ok(Json(post))
}

// ── POST posts.create ─────────────────────────────────────────────────────────

pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    Protected(principal): Protected,
    Input(input): Input<CreatePostInput>,
) -> Result<impl IntoResponse, ApiError> {
    let id = CreatePostUseCase {
        posts: state.post_repo(),
    }
    .execute(&principal, input)
    .await?;
    Ok(created(id))
}

// ── POST posts.update ─────────────────────────────────────────────────────────

pub async fn update<R: Repositories>(
    State(state): State<AppState<R>>,
    Protected(principal): Protected,
    Input(input): Input<UpdatePostInput>,
) -> Result<impl IntoResponse, ApiError> {
    UpdatePostUseCase {
        posts: state.post_repo(),
    }
    .execute(&principal, input)
    .await?;
    Ok(success())
}

// ── POST posts.delete ─────────────────────────────────────────────────────────

pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    Protected(principal): Protected,
    Input(input): Input<IdInput>,
) -> Result<impl IntoResponse, ApiError> {
    DeletePostUseCase {
        posts: state.post_repo(),
    }
    .execute(&principal, &input.id)
    .await?;
    Ok(success())
}
