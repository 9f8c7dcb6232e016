use axum::{Json, extract::State, response::IntoResponse};

use vinipim_domain::media::Media;

use crate::domain::repository::Repositories;
use crate::domain::types::{CreateMediaInput, IdInput};
use crate::error::ApiError;
use crate::extract::{Input, Protected};
use crate::handlers::success;
use crate::state::AppState;
use crate::usecase::media::{CreateMediaUseCase, DeleteMediaUseCase, ListMediaUseCase};

pub async fn get_all<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Media>>, ApiError> {
    let media = ListMediaUseCase {
        media: state.media_repo(),
    }
    .execute()
    .await?;
    Ok(Json(media))
}

/// Returns the stored record with defaults filled in.
pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    Protected(principal): Protected,
    Input(input): Input<CreateMediaInput>,
) -> Result<Json<Media>, ApiError> {
    let media = CreateMediaUseCase {
        media: state.media_repo(),
    }
    .execute(&principal, input)
    .await?;
    Ok(Json(media))
}

pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    _: Protected,
    Input(input): Input<IdInput>,
) -> Result<impl IntoResponse, ApiError> {
    DeleteMediaUseCase {
        media: state.media_repo(),
    }
    .execute(&input.id)
    .await?;
    Ok(success())
}
