use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::Admin,
    ports::{
        incoming::use_cases::{AddAdminCommand, AddAdminError, AddAdminUseCase},
        outgoing::{AdminRepository, AdminRepositoryError, NewAdmin, PasswordHasher},
    },
};

pub struct AddAdminService<R>
where
    R: AdminRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> AddAdminService<R>
where
    R: AdminRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> AddAdminUseCase for AddAdminService<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self, command: AddAdminCommand) -> Result<Admin, AddAdminError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| AddAdminError::HashingFailed(e.to_string()))?;

        // The unique index decides duplicates; no pre-check race.
        self.repository
            .create(NewAdmin {
                username: command.username().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                AdminRepositoryError::UsernameTaken => AddAdminError::UsernameTaken,
                other => AddAdminError::RepositoryError(other.to_string()),
            })
    }
}
