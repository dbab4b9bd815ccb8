//! # Portfolio Table Migration
//!
//! Holds exactly one row (`id = 1`): the site content document.
//!
//! - `content`: JSONB object with the `personal`, `education`, `skills`,
//!   `achievements` and `projects` sections. Writes merge top-level sections
//!   with `content || patch`.
//! - `image` / `resume`: base64 data-URIs kept out of `content` so that a
//!   content write never has to carry them and never clears them.
//! - `version`: bumped by every write.
//!
//! The `CHECK (id = 1)` constraint makes a second row impossible at the
//! schema level.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolio::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolio::Id)
                            .small_integer()
                            .not_null()
                            .primary_key()
                            .check(Expr::col(Portfolio::Id).eq(1)),
                    )
                    .col(
                        ColumnDef::new(Portfolio::Content)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(ColumnDef::new(Portfolio::Image).text())
                    .col(ColumnDef::new(Portfolio::Resume).text())
                    .col(
                        ColumnDef::new(Portfolio::Version)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Portfolio::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Portfolio::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolio_updated_at
                BEFORE UPDATE ON portfolio
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_portfolio_updated_at ON portfolio")
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolio::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Portfolio {
    Table,
    Id,
    Content,
    Image,
    Resume,
    Version,
    CreatedAt,
    UpdatedAt,
}
