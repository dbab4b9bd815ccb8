use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedAdminsError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Populates the admin table from the fallback list when it is empty.
#[async_trait]
pub trait SeedAdminsUseCase: Send + Sync {
    /// Number of admins inserted; `0` when the table already had rows.
    async fn execute(&self) -> Result<u64, SeedAdminsError>;
}
