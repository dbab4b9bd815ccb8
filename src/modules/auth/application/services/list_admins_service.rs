use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::Admin,
    ports::{
        incoming::use_cases::{ListAdminsError, ListAdminsUseCase, SeedAdminsUseCase},
        outgoing::AdminQuery,
    },
};

pub struct ListAdminsService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    query: Q,
    seeder: Arc<dyn SeedAdminsUseCase + Send + Sync>,
}

impl<Q> ListAdminsService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    pub fn new(query: Q, seeder: Arc<dyn SeedAdminsUseCase + Send + Sync>) -> Self {
        Self { query, seeder }
    }
}

#[async_trait]
impl<Q> ListAdminsUseCase for ListAdminsService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Admin>, ListAdminsError> {
        if let Err(e) = self.seeder.execute().await {
            tracing::error!(error = %e, "Seeding fallback admins failed");
        }

        self.query
            .list()
            .await
            .map_err(|e| ListAdminsError::QueryError(e.to_string()))
    }
}
