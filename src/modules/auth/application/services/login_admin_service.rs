use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::Admin,
    ports::{
        incoming::use_cases::{
            LoginAdminError, LoginAdminUseCase, LoginCommand, LoginResult, SeedAdminsUseCase,
        },
        outgoing::{AdminQuery, PasswordHasher, TokenProvider},
    },
};

pub struct LoginAdminService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    seeder: Arc<dyn SeedAdminsUseCase + Send + Sync>,
}

impl<Q> LoginAdminService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        seeder: Arc<dyn SeedAdminsUseCase + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
            seeder,
        }
    }
}

#[async_trait]
impl<Q> LoginAdminUseCase for LoginAdminService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginAdminError> {
        if let Err(e) = self.seeder.execute().await {
            tracing::error!(error = %e, "Seeding fallback admins failed");
        }

        let admin = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginAdminError::QueryError(e.to_string()))?
            .ok_or(LoginAdminError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &admin.password_hash)
            .await
            .map_err(|e| LoginAdminError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginAdminError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(admin.id, &admin.username)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResult {
            user: Admin::from(admin),
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        auth::application::ports::outgoing::AdminQueryError,
        tests::support::{
            admin_mocks::{credentials, CountingSeeder, MockAdminQueryMock, PrefixHasher},
            auth_helper::StubTokenProvider,
        },
    };

    fn service(
        query: MockAdminQueryMock,
        seeder: CountingSeeder,
    ) -> LoginAdminService<MockAdminQueryMock> {
        LoginAdminService::new(
            query,
            Arc::new(PrefixHasher),
            Arc::new(StubTokenProvider),
            Arc::new(seeder),
        )
    }

    fn command(username: &str, password: &str) -> LoginCommand {
        LoginCommand::new(username.to_string(), password.to_string()).unwrap()
    }

    #[tokio::test]
    async fn valid_credentials_issue_access_token() {
        // Arrange
        let admin = credentials("admin", "change-me-now");
        let admin_id = admin.id;

        let mut query = MockAdminQueryMock::new();
        query
            .expect_find_by_username()
            .withf(|username| username == "admin")
            .times(1)
            .returning(move |_| Ok(Some(admin.clone())));

        let seeder = CountingSeeder::default();

        // Act
        let result = service(query, seeder.clone())
            .execute(command(" admin ", "change-me-now"))
            .await
            .unwrap();

        // Assert
        assert_eq!(result.user.id, admin_id);
        assert_eq!(result.user.username, "admin");
        assert_eq!(result.access_token, "access-admin");
        assert_eq!(seeder.calls(), 1);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let admin = credentials("admin", "change-me-now");

        let mut query = MockAdminQueryMock::new();
        query
            .expect_find_by_username()
            .returning(move |_| Ok(Some(admin.clone())));

        let result = service(query, CountingSeeder::default())
            .execute(command("admin", "guess"))
            .await;

        assert!(matches!(result, Err(LoginAdminError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_username_is_invalid_credentials() {
        let mut query = MockAdminQueryMock::new();
        query.expect_find_by_username().returning(|_| Ok(None));

        let result = service(query, CountingSeeder::default())
            .execute(command("ghost", "whatever"))
            .await;

        assert!(matches!(result, Err(LoginAdminError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn seeding_failure_does_not_block_login() {
        let admin = credentials("admin", "pw12345678");

        let mut query = MockAdminQueryMock::new();
        query
            .expect_find_by_username()
            .returning(move |_| Ok(Some(admin.clone())));

        let seeder = CountingSeeder {
            fail: true,
            ..Default::default()
        };

        let result = service(query, seeder)
            .execute(command("admin", "pw12345678"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn query_failure_is_mapped() {
        let mut query = MockAdminQueryMock::new();
        query
            .expect_find_by_username()
            .returning(|_| Err(AdminQueryError::DatabaseError("timeout".to_string())));

        let result = service(query, CountingSeeder::default())
            .execute(command("admin", "pw"))
            .await;

        assert!(matches!(result, Err(LoginAdminError::QueryError(_))));
    }

    #[tokio::test]
    async fn unusable_stored_hash_is_verification_failure() {
        let mut admin = credentials("admin", "pw");
        admin.password_hash = "plaintext".to_string();

        let mut query = MockAdminQueryMock::new();
        query
            .expect_find_by_username()
            .returning(move |_| Ok(Some(admin.clone())));

        let result = service(query, CountingSeeder::default())
            .execute(command("admin", "pw"))
            .await;

        assert!(matches!(
            result,
            Err(LoginAdminError::PasswordVerificationFailed(_))
        ));
    }
}
