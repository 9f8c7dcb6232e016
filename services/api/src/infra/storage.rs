use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage proxy credentials missing")]
    NotConfigured,
    #[error("invalid storage proxy URL")]
    InvalidUrl(#[from] url::ParseError),
}

/// Storage proxy (`BUILT_IN_FORGE_API_URL` / `BUILT_IN_FORGE_API_KEY`).
#[derive(Debug, Clone, Default)]
pub struct StorageClient {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl StorageClient {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        Self { base_url, api_key }
    }

    /// Upload endpoint for `key`: `<base>/v1/storage/upload?path=<key>`,
    /// with leading slashes stripped from the key.
    pub fn upload_url(&self, key: &str) -> Result<String, StorageError> {
        let (Some(base), Some(_)) = (self.base_url.as_deref(), self.api_key.as_deref()) else {
            return Err(StorageError::NotConfigured);
        };

        let mut url = Url::parse(&format!(
            "{}/v1/storage/upload",
            base.trim_end_matches('/')
        ))?;
        url.query_pairs_mut()
            .append_pair("path", key.trim_start_matches('/'));
        Ok(url.into())
    }
}
