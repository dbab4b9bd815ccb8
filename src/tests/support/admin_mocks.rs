use async_trait::async_trait;
use mockall::mock;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{Admin, AdminCredentials},
    ports::{
        incoming::use_cases::{SeedAdminsError, SeedAdminsUseCase},
        outgoing::{
            AdminQuery, AdminQueryError, AdminRepository, AdminRepositoryError, HashError,
            NewAdmin, PasswordHasher,
        },
    },
};

mock! {
    pub AdminQueryMock {}
    #[async_trait]
    impl AdminQuery for AdminQueryMock {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<AdminCredentials>, AdminQueryError>;
        async fn list(&self) -> Result<Vec<Admin>, AdminQueryError>;
        async fn count(&self) -> Result<u64, AdminQueryError>;
    }
}

mock! {
    pub AdminRepositoryMock {}
    #[async_trait]
    impl AdminRepository for AdminRepositoryMock {
        async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError>;
        async fn delete_guarded(&self, id: Uuid) -> Result<(), AdminRepositoryError>;
        async fn insert_seed(&self, admins: Vec<NewAdmin>) -> Result<u64, AdminRepositoryError>;
    }
}

/// Deterministic stand-in for Argon2: `hashed:<password>`.
pub struct PrefixHasher;

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if !hash.starts_with("hashed:") {
            return Err(HashError::VerifyFailed);
        }
        Ok(hash == format!("hashed:{password}"))
    }
}

/// Seeder that only counts how often it was asked to run.
#[derive(Clone, Default)]
pub struct CountingSeeder {
    pub calls: Arc<AtomicUsize>,
    pub fail: bool,
}

impl CountingSeeder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeedAdminsUseCase for CountingSeeder {
    async fn execute(&self) -> Result<u64, SeedAdminsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SeedAdminsError::RepositoryError("seed failed".to_string()));
        }
        Ok(0)
    }
}

pub fn credentials(username: &str, password: &str) -> AdminCredentials {
    AdminCredentials {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: format!("hashed:{password}"),
        created_at: chrono::Utc::now(),
    }
}
