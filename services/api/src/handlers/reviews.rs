//! Review procedures. Reads are public; mutations need any signed-in principal.

use axum::{Json, extract::State, response::IntoResponse};

use vinipim_domain::review::{Review, ReviewStats};

use crate::domain::repository::Repositories;
use crate::domain::types::{CreateReviewInput, IdInput, ReviewListInput, UpdateReviewInput};
use crate::error::ApiError;
use crate::extract::{Input, Protected, QueryInput};
use crate::handlers::{created, success};
use crate::state::AppState;
use crate::usecase::review::{
    CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase, ListReviewsUseCase,
    ReviewStatsUseCase, UpdateReviewUseCase,
};

pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
    QueryInput(input): QueryInput<ReviewListInput>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = ListReviewsUseCase {
        reviews: state.review_repo(),
    }
    .execute(input)
    .await?;
    Ok(Json(reviews))
}

/// The review, or `null` when it does not exist.
pub async fn get_by_id<R: Repositories>(
    State(state): State<AppState<R>>,
    QueryInput(input): QueryInput<IdInput>,
) -> Result<Json<Option<Review>>, ApiError> {
    let review = GetReviewUseCase {
        reviews: state.review_repo(),
    }
    .execute(&input.id)
    .await?;
    Ok(Json(review))
}

pub async fn stats<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<ReviewStats>, ApiError> {
    let stats = ReviewStatsUseCase {
        reviews: state.review_repo(),
    }
    .execute()
    .await?;
    Ok(Json(stats))
}

pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    Protected(principal): Protected,
    Input(input): Input<CreateReviewInput>,
) -> Result<impl IntoResponse, ApiError> {
    let id = CreateReviewUseCase {
        reviews: state.review_repo(),
    }
    .execute(&principal, input)
    .await?;
    Ok(created(id))
}

pub async fn update<R: Repositories>(
    State(state): State<AppState<R>>,
    _: Protected,
    Input(input): Input<UpdateReviewInput>,
) -> Result<impl IntoResponse, ApiError> {
    UpdateReviewUseCase {
        reviews: state.review_repo(),
    }
    .execute(input)
    .await?;
    Ok(success())
}

pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    _: Protected,
    Input(input): Input<IdInput>,
) -> Result<impl IntoResponse, ApiError> {
    DeleteReviewUseCase {
        reviews: state.review_repo(),
    }
    .execute(&input.id)
    .await?;
    Ok(success())
}
