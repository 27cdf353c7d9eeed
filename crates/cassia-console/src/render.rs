//! Generic table-row renderer.
//!
//! Walks the descriptor's column list and turns one entity row (plus its
//! resolved group name) into display cells. Enum-backed badge columns resolve
//! label and color through `DisplayEnum`; a raw value that no longer maps to
//! a member renders as a gray badge carrying the stored value.

use serde::Serialize;

use cassia_persistence::entity::product_property;
use cassia_product::enums::{BadgeColor, DisplayEnum, PropertyStatus, PropertyType};

use crate::descriptor::{self, ColumnKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "display", rename_all_fields = "camelCase")]
pub enum CellDisplay {
    Text { text: String },
    Badge { text: String, color: BadgeColor },
    Icon { checked: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub column: &'static str,
    #[serde(flatten)]
    pub display: CellDisplay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<Cell>,
}

fn badge<E: DisplayEnum>(raw: &str) -> CellDisplay {
    match E::from_value(raw) {
        Some(value) => CellDisplay::Badge {
            text: value.label().to_string(),
            color: value.color(),
        },
        None => CellDisplay::Badge {
            text: raw.to_string(),
            color: BadgeColor::Gray,
        },
    }
}

pub fn render_table_row(
    model: &product_property::Model,
    group_name: Option<&str>,
) -> TableRow {
    let cells = descriptor::table_schema()
        .into_iter()
        .map(|column| {
            let display = match (column.key, &column.kind) {
                ("id", _) => CellDisplay::Text {
                    text: model.id.to_string(),
                },
                ("group.name", _) => CellDisplay::Text {
                    text: group_name.unwrap_or_default().to_string(),
                },
                ("type", ColumnKind::Badge) => badge::<PropertyType>(&model.property_type),
                ("name", _) => CellDisplay::Text {
                    text: model.name.clone(),
                },
                ("unit", _) => CellDisplay::Text {
                    text: model.unit.clone().unwrap_or_default(),
                },
                ("isAllowMultiple", _) => CellDisplay::Icon {
                    checked: model.is_allow_multiple,
                },
                ("isAllowAlias", _) => CellDisplay::Icon {
                    checked: model.is_allow_alias,
                },
                ("sort", _) => CellDisplay::Text {
                    text: model.sort.to_string(),
                },
                ("status", ColumnKind::Badge) => badge::<PropertyStatus>(&model.status),
                (key, _) => CellDisplay::Text {
                    text: key.to_string(),
                },
            };
            Cell {
                column: column.key,
                display,
            }
        })
        .collect();

    TableRow {
        id: model.id,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> product_property::Model {
        let now = chrono::NaiveDateTime::parse_from_str(
            "2024-05-01 12:00:00",
            "%Y-%m-%d %H:%M:%S",
        )
        .unwrap();
        product_property::Model {
            id: 7,
            property_type: "select".to_string(),
            name: "Color".to_string(),
            description: None,
            unit: Some("cm".to_string()),
            group_id: Some(3),
            is_allow_multiple: true,
            is_allow_alias: false,
            sort: 5,
            status: "enable".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_row_follows_column_order() {
        let row = render_table_row(&model(), Some("Basic"));
        let columns: Vec<&str> = row.cells.iter().map(|c| c.column).collect();
        let schema: Vec<&str> = descriptor::table_schema().iter().map(|c| c.key).collect();
        assert_eq!(columns, schema);
        assert_eq!(row.id, 7);
    }

    #[test]
    fn test_badge_cells_resolve_label_and_color() {
        let row = render_table_row(&model(), None);
        assert_eq!(
            row.cells[2].display,
            CellDisplay::Badge {
                text: "Select".to_string(),
                color: BadgeColor::Primary,
            }
        );
        assert_eq!(
            row.cells[8].display,
            CellDisplay::Badge {
                text: "Enabled".to_string(),
                color: BadgeColor::Success,
            }
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let model = model();
        let first = render_table_row(&model, Some("Basic"));
        let second = render_table_row(&model, Some("Basic"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_enum_value_renders_gray_badge() {
        let mut model = model();
        model.status = "archived".to_string();
        let row = render_table_row(&model, None);
        assert_eq!(
            row.cells[8].display,
            CellDisplay::Badge {
                text: "archived".to_string(),
                color: BadgeColor::Gray,
            }
        );
    }

    #[test]
    fn test_boolean_flags_render_as_icons() {
        let row = render_table_row(&model(), None);
        assert_eq!(row.cells[5].display, CellDisplay::Icon { checked: true });
        assert_eq!(row.cells[6].display, CellDisplay::Icon { checked: false });
    }

    #[test]
    fn test_group_name_and_unit_fallbacks() {
        let mut model = model();
        model.unit = None;
        let row = render_table_row(&model, None);
        assert_eq!(
            row.cells[1].display,
            CellDisplay::Text {
                text: String::new()
            }
        );
        assert_eq!(
            row.cells[4].display,
            CellDisplay::Text {
                text: String::new()
            }
        );
    }
}
