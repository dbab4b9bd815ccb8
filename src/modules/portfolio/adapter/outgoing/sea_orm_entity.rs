use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i16,

    #[sea_orm(column_type = "JsonBinary")]
    pub content: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub resume: Option<String>,

    pub version: i64,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
