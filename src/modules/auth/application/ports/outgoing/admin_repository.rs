use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Admin;

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Admin not found")]
    NotFound,

    #[error("Cannot delete the last admin")]
    LastAdmin,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError>;

    /// Deletes `id` unless it would leave the table empty.
    async fn delete_guarded(&self, id: Uuid) -> Result<(), AdminRepositoryError>;

    /// Inserts the fallback admins, skipping usernames that already exist.
    /// Returns how many rows were written.
    async fn insert_seed(&self, admins: Vec<NewAdmin>) -> Result<u64, AdminRepositoryError>;
}
