use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

/// Closes the pool once the server has stopped. Returns `false` when other
/// handles were still alive; the pool is closed through a shared reference
/// in that case, so those handles only see a closed pool.
pub async fn close_pool(db: Arc<DatabaseConnection>) -> Result<bool, DbErr> {
    match Arc::try_unwrap(db) {
        Ok(conn) => {
            conn.close().await?;
            Ok(true)
        }
        Err(shared) => {
            tracing::warn!(
                handles = Arc::strong_count(&shared),
                "Database pool still shared at shutdown"
            );
            shared.close_by_ref().await?;
            Ok(false)
        }
    }
}
