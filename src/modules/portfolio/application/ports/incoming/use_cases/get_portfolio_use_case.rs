use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioView;

/// Visitor read. Never fails: store errors degrade to the static content.
#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> PortfolioView;
}
