//! Write side of the product property resource.
//!
//! Every mutation arrives as a command carrying the validated field set. The
//! one database-backed validation, group existence, happens here before any
//! row is touched; persistence failures propagate unmodified.

use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::info;

use cassia_common::error::CassiaError;
use cassia_common::model::FieldError;
use cassia_persistence::entity::product_property;

use crate::command::{
    PropertyAttributes, PropertyCreateCommand, PropertyDeleteCommand, PropertyUpdateCommand,
};
use crate::enums::DisplayEnum;
use crate::service::property_query;

async fn ensure_group_exists(
    db: &DatabaseConnection,
    group_id: Option<i64>,
) -> anyhow::Result<()> {
    if let Some(group_id) = group_id
        && !property_query::group_exists(db, group_id).await?
    {
        return Err(CassiaError::Validation(vec![FieldError::new(
            "groupId",
            "group_not_exist",
            format!("group '{}' not exist", group_id),
        )])
        .into());
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    command: PropertyCreateCommand,
) -> anyhow::Result<i64> {
    let PropertyAttributes {
        property_type,
        name,
        description,
        unit,
        group_id,
        is_allow_multiple,
        is_allow_alias,
        sort,
        status,
    } = command.attributes;

    ensure_group_exists(db, group_id).await?;

    let now = chrono::Utc::now().naive_utc();
    let entity = product_property::ActiveModel {
        property_type: Set(property_type.value().to_string()),
        name: Set(name),
        description: Set(description),
        unit: Set(unit),
        group_id: Set(group_id),
        is_allow_multiple: Set(is_allow_multiple),
        is_allow_alias: Set(is_allow_alias),
        sort: Set(sort),
        status: Set(status.value().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let res = product_property::Entity::insert(entity).exec(db).await?;
    info!(id = res.last_insert_id, "created product property");

    Ok(res.last_insert_id)
}

pub async fn update(
    db: &DatabaseConnection,
    command: PropertyUpdateCommand,
) -> anyhow::Result<()> {
    let model = product_property::Entity::find_by_id(command.id)
        .one(db)
        .await?
        .ok_or(CassiaError::PropertyNotExist(command.id))?;

    ensure_group_exists(db, command.attributes.group_id).await?;

    let attributes = command.attributes;
    let mut entity: product_property::ActiveModel = model.into();
    entity.property_type = Set(attributes.property_type.value().to_string());
    entity.name = Set(attributes.name);
    entity.description = Set(attributes.description);
    entity.unit = Set(attributes.unit);
    entity.group_id = Set(attributes.group_id);
    entity.is_allow_multiple = Set(attributes.is_allow_multiple);
    entity.is_allow_alias = Set(attributes.is_allow_alias);
    entity.sort = Set(attributes.sort);
    entity.status = Set(attributes.status.value().to_string());
    entity.updated_at = Set(chrono::Utc::now().naive_utc());

    entity.update(db).await?;
    info!(id = command.id, "updated product property");

    Ok(())
}

/// Soft delete: stamps `deleted_at` on live rows only, so repeating the
/// command is a no-op.
pub async fn delete(
    db: &DatabaseConnection,
    command: PropertyDeleteCommand,
) -> anyhow::Result<u64> {
    if command.ids.is_empty() {
        return Ok(0);
    }

    let now = chrono::Utc::now().naive_utc();
    let res = product_property::Entity::update_many()
        .col_expr(product_property::Column::DeletedAt, Expr::value(Some(now)))
        .filter(product_property::Column::Id.is_in(command.ids))
        .filter(product_property::Column::DeletedAt.is_null())
        .exec(db)
        .await?;
    info!(rows = res.rows_affected, "soft deleted product properties");

    Ok(res.rows_affected)
}

/// Permanently removes the rows, trashed or not.
pub async fn force_delete(
    db: &DatabaseConnection,
    command: PropertyDeleteCommand,
) -> anyhow::Result<u64> {
    if command.ids.is_empty() {
        return Ok(0);
    }

    let res = product_property::Entity::delete_many()
        .filter(product_property::Column::Id.is_in(command.ids))
        .exec(db)
        .await?;
    info!(rows = res.rows_affected, "force deleted product properties");

    Ok(res.rows_affected)
}

/// Clears `deleted_at` on trashed rows; live rows are left untouched.
pub async fn restore(
    db: &DatabaseConnection,
    command: PropertyDeleteCommand,
) -> anyhow::Result<u64> {
    if command.ids.is_empty() {
        return Ok(0);
    }

    let cleared: Option<chrono::NaiveDateTime> = None;
    let res = product_property::Entity::update_many()
        .col_expr(product_property::Column::DeletedAt, Expr::value(cleared))
        .filter(product_property::Column::Id.is_in(command.ids))
        .filter(product_property::Column::DeletedAt.is_not_null())
        .exec(db)
        .await?;
    info!(rows = res.rows_affected, "restored product properties");

    Ok(res.rows_affected)
}
