use async_trait::async_trait;
use std::sync::Arc;

use crate::portfolio::application::{
    domain::entities::{PortfolioContent, PortfolioFull},
    ports::{
        incoming::use_cases::{GetFullPortfolioError, GetFullPortfolioUseCase},
        outgoing::{PortfolioQuery, PortfolioRepository},
    },
};

pub struct GetFullPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    query: Q,
    repository: R,
    seed: Arc<PortfolioContent>,
}

impl<Q, R> GetFullPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, seed: Arc<PortfolioContent>) -> Self {
        Self {
            query,
            repository,
            seed,
        }
    }

    async fn fetch(&self) -> Result<Option<PortfolioFull>, GetFullPortfolioError> {
        self.query
            .fetch_full()
            .await
            .map_err(|e| GetFullPortfolioError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q, R> GetFullPortfolioUseCase for GetFullPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioFull, GetFullPortfolioError> {
        if let Some(full) = self.fetch().await? {
            return Ok(full);
        }

        self.repository
            .insert_seed_if_absent(&self.seed)
            .await
            .map_err(|e| GetFullPortfolioError::RepositoryError(e.to_string()))?;

        self.fetch().await?.ok_or(GetFullPortfolioError::Missing)
    }
}
