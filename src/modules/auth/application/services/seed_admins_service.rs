use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::SeedAdmin,
    ports::{
        incoming::use_cases::{SeedAdminsError, SeedAdminsUseCase},
        outgoing::{AdminQuery, AdminRepository, NewAdmin, PasswordHasher},
    },
};

const SEED_ADMINS_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/seed/admins.json"));

/// Static fallback admins bundled with the binary.
pub fn load_seed_admins() -> Result<Vec<SeedAdmin>, serde_json::Error> {
    serde_json::from_str(SEED_ADMINS_JSON)
}

pub struct SeedAdminsService<Q, R>
where
    Q: AdminQuery + Send + Sync,
    R: AdminRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    seed: Vec<SeedAdmin>,
}

impl<Q, R> SeedAdminsService<Q, R>
where
    Q: AdminQuery + Send + Sync,
    R: AdminRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        seed: Vec<SeedAdmin>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            seed,
        }
    }
}

#[async_trait]
impl<Q, R> SeedAdminsUseCase for SeedAdminsService<Q, R>
where
    Q: AdminQuery + Send + Sync,
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self) -> Result<u64, SeedAdminsError> {
        let existing = self
            .query
            .count()
            .await
            .map_err(|e| SeedAdminsError::RepositoryError(e.to_string()))?;

        if existing > 0 {
            return Ok(0);
        }

        let mut admins = Vec::with_capacity(self.seed.len());
        for entry in &self.seed {
            let username = entry.username.trim();
            if username.is_empty() {
                continue;
            }

            let password_hash = self
                .password_hasher
                .hash_password(&entry.password)
                .await
                .map_err(|e| SeedAdminsError::HashingFailed(e.to_string()))?;

            admins.push(NewAdmin {
                username: username.to_string(),
                password_hash,
            });
        }

        let inserted = self
            .repository
            .insert_seed(admins)
            .await
            .map_err(|e| SeedAdminsError::RepositoryError(e.to_string()))?;

        if inserted > 0 {
            tracing::warn!(inserted, "Admin table was empty; fallback admins seeded");
        }

        Ok(inserted)
    }
}
