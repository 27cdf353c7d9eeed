//! `SeaORM` Entity for product_property_group table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "product_property_group")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_property::Entity")]
    ProductProperty,
}

impl Related<super::product_property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductProperty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
