use async_trait::async_trait;

use crate::portfolio::application::domain::{
    data_uri::DataUri, entities::AssetKind, policies::UploadPolicy,
};

/// File part read from a multipart body. `oversized` is set when the reader
/// stopped at its cap, in which case `bytes` is truncated.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    pub oversized: bool,
}

//
// ──────────────────────────────────────────────────────────
// Upload Asset Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UploadAssetCommand {
    kind: AssetKind,
    asset: DataUri,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadAssetCommandError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Unsupported file type for {0}")]
    UnsupportedType(AssetKind),

    #[error("File too large for {0}")]
    TooLarge(AssetKind),

    #[error("Could not encode upload")]
    Encoding,
}

impl UploadAssetCommand {
    /// Checks run in a fixed order: presence, type, then size.
    pub fn new(
        kind: AssetKind,
        file: Option<UploadedFile>,
        policy: &UploadPolicy,
    ) -> Result<Self, UploadAssetCommandError> {
        let file = file.ok_or(UploadAssetCommandError::NoFile)?;

        let mime = match (kind, file.content_type.as_deref()) {
            (AssetKind::Image, None) => policy.default_image_mime.to_string(),
            (_, Some(mime)) => mime.to_ascii_lowercase(),
            (AssetKind::Resume, None) => {
                return Err(UploadAssetCommandError::UnsupportedType(kind))
            }
        };

        if !policy.accepts(kind, &mime) {
            return Err(UploadAssetCommandError::UnsupportedType(kind));
        }

        if file.oversized || file.bytes.len() > policy.max_size_for(kind) {
            return Err(UploadAssetCommandError::TooLarge(kind));
        }

        if file.bytes.is_empty() {
            return Err(UploadAssetCommandError::NoFile);
        }

        let asset = DataUri::from_bytes(&mime, &file.bytes)
            .map_err(|_| UploadAssetCommandError::Encoding)?;

        Ok(Self { kind, asset })
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn asset(&self) -> &DataUri {
        &self.asset
    }

    pub fn into_parts(self) -> (AssetKind, DataUri) {
        (self.kind, self.asset)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadAssetError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UploadAssetUseCase: Send + Sync {
    async fn execute(&self, command: UploadAssetCommand) -> Result<i64, UploadAssetError>;
}
