use async_trait::async_trait;

use crate::auth::application::domain::entities::Admin;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAdminsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListAdminsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Admin>, ListAdminsError>;
}
