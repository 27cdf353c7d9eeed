//! Form validation for product property submissions.
//!
//! Checks run in the declared field order and every failure is reported
//! against the field that caused it. On success the exact validated field set
//! is handed over as `PropertyAttributes`; nothing is reshaped on the way to
//! the command service. Group existence is the one check that needs the
//! database and is performed by the command service before dispatch.

use serde::Deserialize;
use validator::ValidationError;

use cassia_common::model::FieldError;

use crate::command::PropertyAttributes;
use crate::enums::{DisplayEnum, PropertyStatus, PropertyType};

/// Maximum length for the name field
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for the description field
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Maximum length for the unit field
pub const MAX_UNIT_LENGTH: usize = 10;

/// Raw create/edit form submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyPayload {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub group_id: Option<i64>,
    pub is_allow_multiple: Option<bool>,
    pub is_allow_alias: Option<bool>,
    pub sort: Option<i64>,
    pub status: Option<String>,
}

/// Validate the property type; an absent value falls back to SELECT.
pub fn validate_type(value: Option<&str>) -> Result<PropertyType, ValidationError> {
    match value {
        None => Ok(PropertyType::default()),
        Some(raw) => PropertyType::from_value(raw).ok_or_else(|| ValidationError::new("type_invalid")),
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("name_too_long"));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::new("description_too_long"));
    }
    Ok(())
}

pub fn validate_unit(unit: &str) -> Result<(), ValidationError> {
    if unit.chars().count() > MAX_UNIT_LENGTH {
        return Err(ValidationError::new("unit_too_long"));
    }
    Ok(())
}

/// Validate the status; an absent value falls back to ENABLE.
pub fn validate_status(value: Option<&str>) -> Result<PropertyStatus, ValidationError> {
    match value {
        None => Ok(PropertyStatus::default()),
        Some(raw) => {
            PropertyStatus::from_value(raw).ok_or_else(|| ValidationError::new("status_invalid"))
        }
    }
}

fn field_error(field: &str, err: &ValidationError) -> FieldError {
    let message = match err.code.as_ref() {
        "type_invalid" => "type is not a valid property type".to_string(),
        "name_required" => "name is required".to_string(),
        "name_too_long" => format!("name must not exceed {} characters", MAX_NAME_LENGTH),
        "description_too_long" => format!(
            "description must not exceed {} characters",
            MAX_DESCRIPTION_LENGTH
        ),
        "unit_too_long" => format!("unit must not exceed {} characters", MAX_UNIT_LENGTH),
        "status_invalid" => "status is not a valid property status".to_string(),
        code => code.to_string(),
    };

    FieldError::new(field, err.code.to_string(), message)
}

/// Validate a submission in field order, collecting every failure.
///
/// On success the returned attributes carry the submitted values verbatim,
/// with the declared defaults filled in for absent optional fields.
pub fn validate_payload(payload: &PropertyPayload) -> Result<PropertyAttributes, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();

    let property_type = match validate_type(payload.property_type.as_deref()) {
        Ok(value) => value,
        Err(err) => {
            errors.push(field_error("type", &err));
            PropertyType::default()
        }
    };

    let name = payload.name.clone().unwrap_or_default();
    if let Err(err) = validate_name(&name) {
        errors.push(field_error("name", &err));
    }

    if let Some(description) = payload.description.as_deref() {
        if let Err(err) = validate_description(description) {
            errors.push(field_error("description", &err));
        }
    }

    if let Some(unit) = payload.unit.as_deref() {
        if let Err(err) = validate_unit(unit) {
            errors.push(field_error("unit", &err));
        }
    }

    let status = match validate_status(payload.status.as_deref()) {
        Ok(value) => value,
        Err(err) => {
            errors.push(field_error("status", &err));
            PropertyStatus::default()
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PropertyAttributes {
        property_type,
        name,
        description: payload.description.clone(),
        unit: payload.unit.clone(),
        group_id: payload.group_id,
        is_allow_multiple: payload.is_allow_multiple.unwrap_or(false),
        is_allow_alias: payload.is_allow_alias.unwrap_or(false),
        sort: payload.sort.unwrap_or(0),
        status,
    })
}
