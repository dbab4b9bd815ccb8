use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QuerySelect,
};
use std::sync::Arc;

use crate::portfolio::application::{
    domain::entities::{AssetKind, PortfolioContent, PortfolioFull, PORTFOLIO_ID},
    ports::outgoing::{PortfolioQuery, PortfolioQueryError, PortfolioSummary},
};

use super::sea_orm_entity::{Column, Entity, Model};

#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    content: serde_json::Value,
    has_image: bool,
    has_resume: bool,
    version: i64,
}

#[derive(Debug, FromQueryResult)]
struct AssetRow {
    data: Option<String>,
}

#[derive(Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(e.to_string())
}

fn parse_content(raw: serde_json::Value) -> Result<PortfolioContent, PortfolioQueryError> {
    serde_json::from_value(raw).map_err(|e| PortfolioQueryError::MalformedContent(e.to_string()))
}

fn model_to_full(model: Model) -> Result<PortfolioFull, PortfolioQueryError> {
    Ok(PortfolioFull::new(
        parse_content(model.content)?,
        model.image,
        model.resume,
        model.version,
    ))
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn fetch_summary(&self) -> Result<Option<PortfolioSummary>, PortfolioQueryError> {
        let row = Entity::find_by_id(PORTFOLIO_ID)
            .select_only()
            .column(Column::Content)
            .column(Column::Version)
            .column_as(Expr::col(Column::Image).is_not_null(), "has_image")
            .column_as(Expr::col(Column::Resume).is_not_null(), "has_resume")
            .into_model::<SummaryRow>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(|r| {
            Ok(PortfolioSummary {
                content: parse_content(r.content)?,
                has_image: r.has_image,
                has_resume: r.has_resume,
                version: r.version,
            })
        })
        .transpose()
    }

    async fn fetch_full(&self) -> Result<Option<PortfolioFull>, PortfolioQueryError> {
        Entity::find_by_id(PORTFOLIO_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_full)
            .transpose()
    }

    async fn fetch_asset(&self, kind: AssetKind) -> Result<Option<String>, PortfolioQueryError> {
        let column = match kind {
            AssetKind::Image => Column::Image,
            AssetKind::Resume => Column::Resume,
        };

        let row = Entity::find_by_id(PORTFOLIO_ID)
            .select_only()
            .column_as(column, "data")
            .into_model::<AssetRow>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.and_then(|r| r.data))
    }
}
