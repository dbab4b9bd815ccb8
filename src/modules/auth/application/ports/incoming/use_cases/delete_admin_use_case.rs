use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteAdminError {
    #[error("Admin not found")]
    NotFound,

    #[error("Cannot delete the last admin")]
    LastAdmin,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAdminUseCase: Send + Sync {
    async fn execute(&self, admin_id: Uuid) -> Result<(), DeleteAdminError>;
}
