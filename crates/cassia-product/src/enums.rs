//! Property enums and their display capabilities.
//!
//! Both enums expose label, badge color and form options through the single
//! `DisplayEnum` trait, so table badges and form radios resolve them the same
//! way.

use serde::{Deserialize, Serialize};

/// Badge colors used for enumerated table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Gray,
}

/// One selectable option of an enumerated form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumOption {
    pub value: &'static str,
    pub label: &'static str,
    pub color: BadgeColor,
}

/// Capability of an enum whose values carry a label and a display color.
pub trait DisplayEnum: Sized + Copy + 'static {
    /// Raw value as stored in the database.
    fn value(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn color(&self) -> BadgeColor;

    /// All members, in display order.
    fn all() -> &'static [Self];

    fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.value() == value)
    }

    /// Ordered (value, label, color) records for form radios.
    fn options() -> Vec<EnumOption> {
        Self::all()
            .iter()
            .map(|v| EnumOption {
                value: v.value(),
                label: v.label(),
                color: v.color(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Select,
    Text,
}

impl DisplayEnum for PropertyType {
    fn value(&self) -> &'static str {
        match self {
            PropertyType::Select => "select",
            PropertyType::Text => "text",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PropertyType::Select => "Select",
            PropertyType::Text => "Text",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            PropertyType::Select => BadgeColor::Primary,
            PropertyType::Text => BadgeColor::Info,
        }
    }

    fn all() -> &'static [Self] {
        &[PropertyType::Select, PropertyType::Text]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Enable,
    Disable,
}

impl DisplayEnum for PropertyStatus {
    fn value(&self) -> &'static str {
        match self {
            PropertyStatus::Enable => "enable",
            PropertyStatus::Disable => "disable",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Enable => "Enabled",
            PropertyStatus::Disable => "Disabled",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            PropertyStatus::Enable => BadgeColor::Success,
            PropertyStatus::Disable => BadgeColor::Danger,
        }
    }

    fn all() -> &'static [Self] {
        &[PropertyStatus::Enable, PropertyStatus::Disable]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_from_value() {
        assert_eq!(PropertyType::from_value("select"), Some(PropertyType::Select));
        assert_eq!(PropertyType::from_value("text"), Some(PropertyType::Text));
        assert_eq!(PropertyType::from_value("radio"), None);
        assert_eq!(PropertyType::from_value(""), None);
    }

    #[test]
    fn test_property_status_from_value() {
        assert_eq!(
            PropertyStatus::from_value("enable"),
            Some(PropertyStatus::Enable)
        );
        assert_eq!(
            PropertyStatus::from_value("disable"),
            Some(PropertyStatus::Disable)
        );
        assert_eq!(PropertyStatus::from_value("on"), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PropertyType::default(), PropertyType::Select);
        assert_eq!(PropertyStatus::default(), PropertyStatus::Enable);
    }

    #[test]
    fn test_options_order_and_shape() {
        let options = PropertyType::options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "select");
        assert_eq!(options[0].label, "Select");
        assert_eq!(options[1].value, "text");

        let options = PropertyStatus::options();
        assert_eq!(options[0].value, "enable");
        assert_eq!(options[0].color, BadgeColor::Success);
        assert_eq!(options[1].color, BadgeColor::Danger);
    }

    #[test]
    fn test_label_color_stable_across_calls() {
        // Rendering the same value twice must yield the same label and color.
        let status = PropertyStatus::Enable;
        assert_eq!(status.label(), status.label());
        assert_eq!(status.color(), status.color());

        let ty = PropertyType::Select;
        assert_eq!(ty.label(), ty.label());
        assert_eq!(ty.color(), ty.color());
    }

    #[test]
    fn test_badge_color_serialization() {
        assert_eq!(
            serde_json::to_string(&BadgeColor::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&BadgeColor::Gray).unwrap(),
            "\"gray\""
        );
    }

    #[test]
    fn test_enum_value_serialization_matches_stored_value() {
        for ty in PropertyType::all() {
            let json = serde_json::to_string(ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.value()));
        }
        for status in PropertyStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.value()));
        }
    }
}
