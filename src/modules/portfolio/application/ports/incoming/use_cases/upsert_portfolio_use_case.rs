use async_trait::async_trait;
use serde_json::Value;

use crate::portfolio::application::{
    domain::{
        data_uri::DataUri,
        entities::{AssetKind, PortfolioPatch},
        policies::UploadPolicy,
        system_fields::strip_system_fields,
    },
    ports::outgoing::PortfolioWrite,
};

//
// ──────────────────────────────────────────────────────────
// Upsert Portfolio Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct UpsertPortfolioCommand {
    write: PortfolioWrite,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpsertPortfolioCommandError {
    #[error("Body must be a JSON object")]
    NotAnObject,

    #[error("Invalid portfolio shape: {0}")]
    InvalidShape(String),

    #[error("Invalid {0} data-URI")]
    InvalidAsset(AssetKind),

    #[error("Unsupported file type for {0}")]
    UnsupportedAssetType(AssetKind),

    #[error("File too large for {0}")]
    AssetTooLarge(AssetKind),
}

impl UpsertPortfolioCommand {
    /// Builds a write from whatever the admin editor submitted. System fields
    /// and read-only flags are dropped; `personal.image` / `personal.resume`
    /// are lifted out and only kept when non-empty. Lifted assets go through
    /// the same type and size checks as a multipart upload.
    pub fn from_json(
        mut value: Value,
        policy: &UploadPolicy,
    ) -> Result<Self, UpsertPortfolioCommandError> {
        if !value.is_object() {
            return Err(UpsertPortfolioCommandError::NotAnObject);
        }

        strip_system_fields(&mut value);

        let (image, resume) = match value.get_mut("personal").and_then(Value::as_object_mut) {
            Some(personal) => (
                take_asset(personal.remove("image"), AssetKind::Image, policy)?,
                take_asset(personal.remove("resume"), AssetKind::Resume, policy)?,
            ),
            None => (None, None),
        };

        let patch: PortfolioPatch = serde_json::from_value(value)
            .map_err(|e| UpsertPortfolioCommandError::InvalidShape(e.to_string()))?;

        Ok(Self {
            write: PortfolioWrite {
                patch,
                image,
                resume,
            },
        })
    }

    pub fn write(&self) -> &PortfolioWrite {
        &self.write
    }

    pub fn into_write(self) -> PortfolioWrite {
        self.write
    }
}

fn take_asset(
    value: Option<Value>,
    kind: AssetKind,
    policy: &UploadPolicy,
) -> Result<Option<DataUri>, UpsertPortfolioCommandError> {
    let uri = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => {
            DataUri::parse(s).map_err(|_| UpsertPortfolioCommandError::InvalidAsset(kind))?
        }
        Some(_) => return Err(UpsertPortfolioCommandError::InvalidAsset(kind)),
    };

    if !policy.accepts(kind, &uri.mime().to_ascii_lowercase()) {
        return Err(UpsertPortfolioCommandError::UnsupportedAssetType(kind));
    }

    let decoded = uri
        .decode()
        .map_err(|_| UpsertPortfolioCommandError::InvalidAsset(kind))?;
    if decoded.len() > policy.max_size_for(kind) {
        return Err(UpsertPortfolioCommandError::AssetTooLarge(kind));
    }

    Ok(Some(uri))
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertPortfolioError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpsertPortfolioUseCase: Send + Sync {
    /// Returns the version written.
    async fn execute(&self, command: UpsertPortfolioCommand) -> Result<i64, UpsertPortfolioError>;
}
