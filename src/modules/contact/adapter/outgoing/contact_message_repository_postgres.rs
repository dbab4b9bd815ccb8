use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::ContactMessage,
    ports::outgoing::{ContactMessageRepository, ContactMessageRepositoryError},
};

use super::sea_orm_entity::{ActiveModel, Entity};

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn save(&self, message: &ContactMessage) -> Result<(), ContactMessageRepositoryError> {
        let row = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(message.first_name.clone()),
            last_name: Set(message.last_name.clone()),
            email: Set(message.email.clone()),
            message: Set(message.message.clone()),
            created_at: NotSet,
        };

        Entity::insert(row)
            .exec_without_returning(&*self.db)
            .await
            .map(|_| ())
            .map_err(|e| ContactMessageRepositoryError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn message() -> ContactMessage {
        ContactMessage {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn save_inserts_one_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));

        assert!(repo.save(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn save_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Exec(RuntimeErr::Internal("disk full".into()))])
            .into_connection();
        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.save(&message()).await,
            Err(ContactMessageRepositoryError::DatabaseError(msg)) if msg.contains("disk full")
        ));
    }
}
