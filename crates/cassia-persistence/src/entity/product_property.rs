//! `SeaORM` Entity for product_property table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "product_property")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Raw stored enum value, parsed by the domain layer.
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub property_type: String,
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub group_id: Option<i64>,
    pub is_allow_multiple: bool,
    pub is_allow_alias: bool,
    pub sort: i64,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    /// Soft-delete marker; a row with a timestamp here is "trashed".
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_property_group::Entity",
        from = "Column::GroupId",
        to = "super::product_property_group::Column::Id"
    )]
    ProductPropertyGroup,
}

impl Related<super::product_property_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductPropertyGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
