use async_trait::async_trait;
use std::sync::Arc;

use crate::portfolio::application::{
    domain::entities::PortfolioContent,
    ports::{
        incoming::use_cases::{
            UpsertPortfolioCommand, UpsertPortfolioError, UpsertPortfolioUseCase,
        },
        outgoing::PortfolioRepository,
    },
};

pub struct UpsertPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
    seed: Arc<PortfolioContent>,
}

impl<R> UpsertPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R, seed: Arc<PortfolioContent>) -> Self {
        Self { repository, seed }
    }
}

#[async_trait]
impl<R> UpsertPortfolioUseCase for UpsertPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, command: UpsertPortfolioCommand) -> Result<i64, UpsertPortfolioError> {
        let write = command.into_write();

        tracing::debug!(
            replaces_image = write.image.is_some(),
            replaces_resume = write.resume.is_some(),
            "Upserting portfolio content"
        );

        self.repository
            .upsert_singleton(write, &self.seed)
            .await
            .map_err(|e| UpsertPortfolioError::RepositoryError(e.to_string()))
    }
}
