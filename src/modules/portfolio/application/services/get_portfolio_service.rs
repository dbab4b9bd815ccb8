use async_trait::async_trait;
use std::sync::Arc;

use crate::portfolio::application::{
    domain::entities::{PortfolioContent, PortfolioView},
    ports::{
        incoming::use_cases::GetPortfolioUseCase,
        outgoing::{PortfolioQuery, PortfolioRepository},
    },
};

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("query failed: {0}")]
    Query(String),
    #[error("seeding failed: {0}")]
    Seed(String),
    #[error("portfolio missing after seeding")]
    Missing,
}

pub struct GetPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    query: Q,
    repository: R,
    seed: Arc<PortfolioContent>,
}

impl<Q, R> GetPortfolioService<Q, R>
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

    async fn load(&self) -> Result<PortfolioView, LoadError> {
        let summary = self
            .query
            .fetch_summary()
            .await
            .map_err(|e| LoadError::Query(e.to_string()))?;

        if let Some(s) = summary {
            return Ok(PortfolioView::new(
                s.content,
                s.has_image,
                s.has_resume,
                s.version,
            ));
        }

        tracing::info!("Portfolio store is empty, seeding static content");

        self.repository
            .insert_seed_if_absent(&self.seed)
            .await
            .map_err(|e| LoadError::Seed(e.to_string()))?;

        let s = self
            .query
            .fetch_summary()
            .await
            .map_err(|e| LoadError::Query(e.to_string()))?
            .ok_or(LoadError::Missing)?;

        Ok(PortfolioView::new(
            s.content,
            s.has_image,
            s.has_resume,
            s.version,
        ))
    }
}

#[async_trait]
impl<Q, R> GetPortfolioUseCase for GetPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> PortfolioView {
        match self.load().await {
            Ok(view) => view,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read portfolio, serving static content");
                PortfolioView::fallback(&self.seed)
            }
        }
    }
}
