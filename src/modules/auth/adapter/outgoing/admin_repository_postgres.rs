use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::Admin,
    ports::outgoing::{AdminRepository, AdminRepositoryError, NewAdmin},
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AdminRepositoryError {
    AdminRepositoryError::DatabaseError(e.to_string())
}

fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

fn new_row(admin: NewAdmin) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(admin.username),
        password_hash: Set(admin.password_hash),
        created_at: NotSet,
    }
}

/// Taken before counting. Conflicts with itself, so concurrent deleters queue
/// behind each other and each one counts what the previous one committed.
const LOCK_ADMINS: &str = "LOCK TABLE admins IN SHARE ROW EXCLUSIVE MODE";
const COUNT_ADMINS: &str = "SELECT COUNT(*) AS num_items FROM admins";

async fn delete_in(txn: &DatabaseTransaction, id: Uuid) -> Result<(), AdminRepositoryError> {
    let backend = txn.get_database_backend();

    txn.execute(Statement::from_string(backend, LOCK_ADMINS))
        .await
        .map_err(map_db_err)?;

    let remaining: i64 = match txn
        .query_one(Statement::from_string(backend, COUNT_ADMINS))
        .await
        .map_err(map_db_err)?
    {
        Some(row) => row.try_get("", "num_items").map_err(map_db_err)?,
        None => 0,
    };

    if remaining <= 1 {
        return Err(AdminRepositoryError::LastAdmin);
    }

    let result = Entity::delete_by_id(id)
        .exec(txn)
        .await
        .map_err(map_db_err)?;

    if result.rows_affected == 0 {
        return Err(AdminRepositoryError::NotFound);
    }

    Ok(())
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError> {
        let inserted = new_row(admin).insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                AdminRepositoryError::UsernameTaken
            } else {
                map_db_err(e)
            }
        })?;

        Ok(Admin {
            id: inserted.id,
            username: inserted.username,
        })
    }

    async fn delete_guarded(&self, id: Uuid) -> Result<(), AdminRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match delete_in(&txn, id).await {
            Ok(()) => txn.commit().await.map_err(map_db_err),
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn insert_seed(&self, admins: Vec<NewAdmin>) -> Result<u64, AdminRepositoryError> {
        if admins.is_empty() {
            return Ok(0);
        }

        Entity::insert_many(admins.into_iter().map(new_row))
            .on_conflict(OnConflict::column(Column::Username).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
