use async_trait::async_trait;

use crate::portfolio::application::domain::entities::AssetKind;

/// Decoded asset ready to be streamed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPayload {
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchAssetError {
    #[error("Asset not found")]
    NotFound,

    #[error("Stored asset is malformed: {0}")]
    Malformed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchAssetUseCase: Send + Sync {
    async fn execute(&self, kind: AssetKind) -> Result<AssetPayload, FetchAssetError>;
}
