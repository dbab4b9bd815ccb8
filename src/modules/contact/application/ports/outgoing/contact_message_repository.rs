use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn save(&self, message: &ContactMessage) -> Result<(), ContactMessageRepositoryError>;
}
