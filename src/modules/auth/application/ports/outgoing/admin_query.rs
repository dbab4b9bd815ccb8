use async_trait::async_trait;

use crate::auth::application::domain::entities::{Admin, AdminCredentials};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminQuery: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, AdminQueryError>;

    /// All admins, oldest first.
    async fn list(&self) -> Result<Vec<Admin>, AdminQueryError>;

    async fn count(&self) -> Result<u64, AdminQueryError>;
}
