use async_trait::async_trait;

use crate::portfolio::application::domain::entities::{AssetKind, PortfolioContent, PortfolioFull};

/// Content plus presence flags; the asset columns themselves are not loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub content: PortfolioContent,
    pub has_image: bool,
    pub has_resume: bool,
    pub version: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored content is malformed: {0}")]
    MalformedContent(String),
}

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn fetch_summary(&self) -> Result<Option<PortfolioSummary>, PortfolioQueryError>;

    async fn fetch_full(&self) -> Result<Option<PortfolioFull>, PortfolioQueryError>;

    /// Raw stored data-URI of one asset; `None` when the row or the value is absent.
    async fn fetch_asset(&self, kind: AssetKind) -> Result<Option<String>, PortfolioQueryError>;
}
