//! Review use cases.
//!
//! Reads degrade when the datastore is unavailable: listing yields nothing,
//! lookups yield `None` and stats are all zero. Mutations fail.

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use vinipim_domain::review::{Review, ReviewStats};

use crate::authz::Principal;
use crate::domain::repository::ReviewRepository;
use crate::domain::types::{CreateReviewInput, ReviewListInput, UpdateReviewInput};
use crate::error::ApiError;

pub struct ListReviewsUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> ListReviewsUseCase<R> {
    pub async fn execute(&self, query: ReviewListInput) -> Result<Vec<Review>, ApiError> {
        match self.reviews.list(&query).await {
            Err(ApiError::DatabaseUnavailable) => {
                warn!("datastore unavailable, listing no reviews");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

pub struct GetReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> GetReviewUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<Option<Review>, ApiError> {
        match self.reviews.find_by_id(id).await {
            Err(ApiError::DatabaseUnavailable) => {
                warn!("datastore unavailable, review lookup yields nothing");
                Ok(None)
            }
            other => other,
        }
    }
}

pub struct ReviewStatsUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> ReviewStatsUseCase<R> {
    pub async fn execute(&self) -> Result<ReviewStats, ApiError> {
        match self.reviews.list(&ReviewListInput::default()).await {
            Ok(all) => Ok(ReviewStats::from_reviews(&all)),
            Err(ApiError::DatabaseUnavailable) => {
                warn!("datastore unavailable, reporting empty review stats");
                Ok(ReviewStats::default())
            }
            Err(e) => Err(e),
        }
    }
}

pub struct CreateReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> CreateReviewUseCase<R> {
    /// Returns the new review id.
    pub async fn execute(
        &self,
        principal: &Principal,
        input: CreateReviewInput,
    ) -> Result<String, ApiError> {
        input.validate()?;

        let now = Utc::now();
        let review = Review {
            id: Uuid::new_v4().to_string(),
            kind: input.kind,
            title: input.title,
            creator: input.creator,
            year: input.year,
            rating: input.rating,
            notes: input.notes,
            tags: input.tags,
            cover_image: input.cover_image,
            api_id: input.api_id,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
            user_id: Some(principal.id().to_owned()),
        };
        self.reviews.create(&review).await?;
        Ok(review.id)
    }
}

pub struct UpdateReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> UpdateReviewUseCase<R> {
    pub async fn execute(&self, input: UpdateReviewInput) -> Result<(), ApiError> {
        input.validate()?;

        if self.reviews.update(&input.id, &input.changes, Utc::now()).await? {
            Ok(())
        } else {
            Err(ApiError::ReviewNotFound)
        }
    }
}

pub struct DeleteReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> DeleteReviewUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<(), ApiError> {
        if self.reviews.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::ReviewNotFound)
        }
    }
}
