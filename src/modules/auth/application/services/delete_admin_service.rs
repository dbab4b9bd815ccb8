use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::{
    incoming::use_cases::{DeleteAdminError, DeleteAdminUseCase},
    outgoing::{AdminRepository, AdminRepositoryError},
};

pub struct DeleteAdminService<R>
where
    R: AdminRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteAdminService<R>
where
    R: AdminRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAdminUseCase for DeleteAdminService<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self, admin_id: Uuid) -> Result<(), DeleteAdminError> {
        self.repository
            .delete_guarded(admin_id)
            .await
            .map_err(|e| match e {
                AdminRepositoryError::NotFound => DeleteAdminError::NotFound,
                AdminRepositoryError::LastAdmin => DeleteAdminError::LastAdmin,
                other => DeleteAdminError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::tests::support::admin_mocks::MockAdminRepositoryMock;

    #[tokio::test]
    async fn deletes_by_id() {
        let id = Uuid::new_v4();
        let mut repo = MockAdminRepositoryMock::new();
        repo.expect_delete_guarded()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        assert!(DeleteAdminService::new(repo).execute(id).await.is_ok());
    }

    #[tokio::test]
    async fn last_admin_is_refused() {
        let mut repo = MockAdminRepositoryMock::new();
        repo.expect_delete_guarded()
            .returning(|_| Err(AdminRepositoryError::LastAdmin));

        assert_eq!(
            DeleteAdminService::new(repo)
                .execute(Uuid::new_v4())
                .await
                .unwrap_err(),
            DeleteAdminError::LastAdmin
        );
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut repo = MockAdminRepositoryMock::new();
        repo.expect_delete_guarded()
            .returning(|_| Err(AdminRepositoryError::NotFound));

        assert_eq!(
            DeleteAdminService::new(repo)
                .execute(Uuid::new_v4())
                .await
                .unwrap_err(),
            DeleteAdminError::NotFound
        );
    }
}
