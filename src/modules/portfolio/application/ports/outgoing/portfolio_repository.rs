use async_trait::async_trait;

use crate::portfolio::application::domain::{
    data_uri::DataUri,
    entities::{AssetKind, PortfolioContent, PortfolioPatch},
};

/// A content edit after system fields were stripped and assets validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioWrite {
    pub patch: PortfolioPatch,
    pub image: Option<DataUri>,
    pub resume: Option<DataUri>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Writes against the singleton portfolio row. Every method is a single
/// statement; `seed` is only used when the row does not exist yet.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Inserts `seed` unless the row already exists.
    async fn insert_seed_if_absent(
        &self,
        seed: &PortfolioContent,
    ) -> Result<(), PortfolioRepositoryError>;

    /// Merges the supplied sections over the stored content. Image and
    /// resume are only written when present. Returns the new version.
    async fn upsert_singleton(
        &self,
        write: PortfolioWrite,
        seed: &PortfolioContent,
    ) -> Result<i64, PortfolioRepositoryError>;

    /// Replaces one asset column, leaving content and the other asset alone.
    async fn store_asset(
        &self,
        kind: AssetKind,
        asset: DataUri,
        seed: &PortfolioContent,
    ) -> Result<i64, PortfolioRepositoryError>;
}
