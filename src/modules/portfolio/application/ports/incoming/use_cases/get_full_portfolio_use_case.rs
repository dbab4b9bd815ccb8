use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioFull;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFullPortfolioError {
    #[error("Portfolio missing after seeding")]
    Missing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetFullPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioFull, GetFullPortfolioError>;
}
