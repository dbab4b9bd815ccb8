use async_trait::async_trait;
use sea_orm::sea_query::{
    extension::postgres::PgBinOper, Alias, Expr, InsertStatement, OnConflict,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryTrait, Set};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::portfolio::application::{
    domain::{
        data_uri::DataUri,
        entities::{AssetKind, PortfolioContent, PORTFOLIO_ID},
    },
    ports::outgoing::{PortfolioRepository, PortfolioRepositoryError, PortfolioWrite},
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn execute_returning_version(
        &self,
        stmt: InsertStatement,
    ) -> Result<i64, PortfolioRepositoryError> {
        let stmt = self.db.get_database_backend().build(&stmt);

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                PortfolioRepositoryError::DatabaseError("upsert returned no row".to_string())
            })?;

        row.try_get::<i64>("", "version").map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<JsonValue, PortfolioRepositoryError> {
    serde_json::to_value(value)
        .map_err(|e| PortfolioRepositoryError::SerializationError(e.to_string()))
}

/// Top-level merge, same semantics as jsonb `||`.
fn merge_sections(mut base: JsonValue, patch: &JsonValue) -> JsonValue {
    if let (Some(base_map), Some(patch_map)) = (base.as_object_mut(), patch.as_object()) {
        for (key, value) in patch_map {
            base_map.insert(key.clone(), value.clone());
        }
    }
    base
}

fn seed_row(content: JsonValue) -> ActiveModel {
    ActiveModel {
        id: Set(PORTFOLIO_ID),
        content: Set(content),
        version: Set(1),
        ..Default::default()
    }
}

/// Base ON CONFLICT clause shared by every write: bump version and touch
/// `updated_at`.
fn versioned_conflict() -> OnConflict {
    let mut on_conflict = OnConflict::column(Column::Id);
    on_conflict
        .value(
            Column::Version,
            Expr::col((Entity, Column::Version)).add(1i64),
        )
        .value(Column::UpdatedAt, Expr::current_timestamp());
    on_conflict
}

fn asset_column(kind: AssetKind) -> Column {
    match kind {
        AssetKind::Image => Column::Image,
        AssetKind::Resume => Column::Resume,
    }
}

/// Single-statement upsert. Content sections are merged with `||` against
/// the stored row; asset columns appear in the statement only when the write
/// carries them, so an edit without assets cannot clear them.
pub(crate) fn build_upsert_statement(
    write: &PortfolioWrite,
    seed: &PortfolioContent,
) -> Result<InsertStatement, PortfolioRepositoryError> {
    let patch = to_json(&write.patch)?;
    let initial = merge_sections(to_json(seed)?, &patch);

    let mut row = seed_row(initial);
    let mut on_conflict = versioned_conflict();
    on_conflict.value(
        Column::Content,
        Expr::col((Entity, Column::Content)).binary(
            PgBinOper::Concatenate,
            Expr::val(patch).cast_as(Alias::new("jsonb")),
        ),
    );

    if let Some(image) = &write.image {
        row.image = Set(Some(image.as_str().to_string()));
        on_conflict.update_column(Column::Image);
    }

    if let Some(resume) = &write.resume {
        row.resume = Set(Some(resume.as_str().to_string()));
        on_conflict.update_column(Column::Resume);
    }

    let mut stmt = Entity::insert(row).on_conflict(on_conflict).into_query();
    stmt.returning_col(Column::Version);
    Ok(stmt)
}

pub(crate) fn build_store_asset_statement(
    kind: AssetKind,
    asset: &DataUri,
    seed: &PortfolioContent,
) -> Result<InsertStatement, PortfolioRepositoryError> {
    let column = asset_column(kind);

    let mut row = seed_row(to_json(seed)?);
    match kind {
        AssetKind::Image => row.image = Set(Some(asset.as_str().to_string())),
        AssetKind::Resume => row.resume = Set(Some(asset.as_str().to_string())),
    }

    let mut on_conflict = versioned_conflict();
    on_conflict.update_column(column);

    let mut stmt = Entity::insert(row).on_conflict(on_conflict).into_query();
    stmt.returning_col(Column::Version);
    Ok(stmt)
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn insert_seed_if_absent(
        &self,
        seed: &PortfolioContent,
    ) -> Result<(), PortfolioRepositoryError> {
        let inserted = Entity::insert(seed_row(to_json(seed)?))
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        if inserted > 0 {
            tracing::info!("Seeded portfolio content");
        }

        Ok(())
    }

    async fn upsert_singleton(
        &self,
        write: PortfolioWrite,
        seed: &PortfolioContent,
    ) -> Result<i64, PortfolioRepositoryError> {
        let stmt = build_upsert_statement(&write, seed)?;
        self.execute_returning_version(stmt).await
    }

    async fn store_asset(
        &self,
        kind: AssetKind,
        asset: DataUri,
        seed: &PortfolioContent,
    ) -> Result<i64, PortfolioRepositoryError> {
        let stmt = build_store_asset_statement(kind, &asset, seed)?;
        self.execute_returning_version(stmt).await
    }
}
