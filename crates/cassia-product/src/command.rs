//! Commands dispatched to the property command service.

use serde::Serialize;

use crate::enums::{PropertyStatus, PropertyType};

/// The validated field set of a create/update submission, forwarded to the
/// command service unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAttributes {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub group_id: Option<i64>,
    pub is_allow_multiple: bool,
    pub is_allow_alias: bool,
    pub sort: i64,
    pub status: PropertyStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCreateCommand {
    pub attributes: PropertyAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdateCommand {
    pub id: i64,
    pub attributes: PropertyAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDeleteCommand {
    pub ids: Vec<i64>,
}
