use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use vinipim_domain::media::Media;

use crate::authz::Principal;
use crate::domain::repository::MediaRepository;
use crate::domain::types::CreateMediaInput;
use crate::error::ApiError;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub struct ListMediaUseCase<M: MediaRepository> {
    pub media: M,
}

impl<M: MediaRepository> ListMediaUseCase<M> {
    pub async fn execute(&self) -> Result<Vec<Media>, ApiError> {
        match self.media.list().await {
            Err(ApiError::DatabaseUnavailable) => {
                warn!("datastore unavailable, listing no media");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

pub struct CreateMediaUseCase<M: MediaRepository> {
    pub media: M,
}

impl<M: MediaRepository> CreateMediaUseCase<M> {
    /// Store a media record, filling defaults for omitted fields, and return it.
    pub async fn execute(
        &self,
        principal: &Principal,
        input: CreateMediaInput,
    ) -> Result<Media, ApiError> {
        input.validate()?;

        let now = Utc::now();
        let record = Media {
            id: Uuid::new_v4().to_string(),
            filename: input
                .filename
                .unwrap_or_else(|| format!("media-{}", now.timestamp_millis())),
            file_type: input.file_type,
            content_type: input
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned()),
            size: input.size.unwrap_or(0),
            storage_key: input.storage_key.unwrap_or_else(|| input.url.clone()),
            url: input.url,
            thumbnail: input.thumbnail,
            created_at: now,
            updated_at: now,
            user_id: Some(principal.id().to_owned()),
        };
        self.media.create(&record).await?;
        Ok(record)
    }
}

pub struct DeleteMediaUseCase<M: MediaRepository> {
    pub media: M,
}

impl<M: MediaRepository> DeleteMediaUseCase<M> {
    pub async fn execute(&self, id: &str) -> Result<(), ApiError> {
        if self.media.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::MediaNotFound)
        }
    }
}
