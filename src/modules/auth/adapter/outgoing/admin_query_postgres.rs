use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{Admin, AdminCredentials},
    ports::outgoing::{AdminQuery, AdminQueryError},
};

use super::sea_orm_entity::{Column, Entity, Model};

#[derive(Debug, FromQueryResult)]
struct AdminRow {
    id: Uuid,
    username: String,
}

#[derive(Clone)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AdminQueryError {
    AdminQueryError::DatabaseError(e.to_string())
}

impl From<Model> for AdminCredentials {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, AdminQueryError> {
        let model = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(AdminCredentials::from))
    }

    async fn list(&self) -> Result<Vec<Admin>, AdminQueryError> {
        let rows = Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::Username)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Username)
            .into_model::<AdminRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| Admin {
                id: r.id,
                username: r.username,
            })
            .collect())
    }

    async fn count(&self) -> Result<u64, AdminQueryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }
}
