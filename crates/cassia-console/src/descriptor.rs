//! Declarative descriptor of the product property resource.
//!
//! The resource is described as ordered lists of small configuration records:
//! form fields with their constraints and defaults, table columns with their
//! rendering rule, the trashed filter, row and bulk actions, and the route
//! map of the four logical pages. A generic renderer (`crate::render`)
//! consumes the column list; the page handlers (`crate::v1::property`)
//! compose the rest.

use serde::Serialize;
use serde_json::{Value, json};

use cassia_product::enums::{DisplayEnum, EnumOption, PropertyStatus, PropertyType};
use cassia_product::service::property_query::GroupOption;

use crate::labels;

pub const RESOURCE_PREFIX: &str = "/product-properties";

// Logical page routes, relative to the resource scope.
pub const INDEX_PATH: &str = "";
pub const CREATE_PATH: &str = "/create";
pub const VIEW_PATH: &str = "/{id}";
pub const EDIT_PATH: &str = "/{id}/edit";

/// Row-click navigation is disabled; records are reached only through the
/// explicit view/edit actions.
pub const RECORD_URL: Option<&'static str> = None;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", rename_all_fields = "camelCase")]
pub enum FieldKind {
    /// Inline radio group over an enum's options.
    Radio { options: Vec<EnumOption> },
    Text { max_length: usize },
    /// Relation select with eager-preloaded options, searchable by the
    /// related record's name.
    Select {
        relation: &'static str,
        search_by: &'static str,
        options: Vec<GroupOption>,
        nullable: bool,
    },
    /// Yes/no radio pair.
    BooleanRadio,
    Integer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", rename_all_fields = "camelCase")]
pub enum ColumnKind {
    Text {
        copyable: bool,
        sortable: bool,
        searchable: bool,
        numeric: bool,
    },
    /// Colored label resolved through the value's `DisplayEnum` impl.
    Badge,
    /// Boolean glyph.
    BooleanIcon,
}

impl ColumnKind {
    fn plain_text() -> Self {
        ColumnKind::Text {
            copyable: false,
            sortable: false,
            searchable: false,
            numeric: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    pub key: &'static str,
    pub label: String,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSchema {
    pub name: &'static str,
    pub label: String,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSchema {
    pub name: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDef {
    pub name: &'static str,
    pub path: &'static str,
}

fn field_label(key: &str) -> String {
    labels::trans(key).to_string()
}

/// Ordered create/edit form fields. Group options are preloaded by the
/// caller so the select ships with its choices.
pub fn form_schema(group_options: Vec<GroupOption>) -> Vec<FieldSchema> {
    vec![
        FieldSchema {
            name: "type",
            label: field_label("product-property.fields.type"),
            required: true,
            default: Some(json!(PropertyType::default().value())),
            kind: FieldKind::Radio {
                options: PropertyType::options(),
            },
        },
        FieldSchema {
            name: "name",
            label: field_label("product-property.fields.name"),
            required: true,
            default: None,
            kind: FieldKind::Text { max_length: 255 },
        },
        FieldSchema {
            name: "description",
            label: field_label("product-property.fields.description"),
            required: false,
            default: None,
            kind: FieldKind::Text { max_length: 255 },
        },
        FieldSchema {
            name: "unit",
            label: field_label("product-property.fields.unit"),
            required: false,
            default: None,
            kind: FieldKind::Text { max_length: 10 },
        },
        FieldSchema {
            name: "groupId",
            label: field_label("product-property.fields.group.name"),
            required: false,
            default: None,
            kind: FieldKind::Select {
                relation: "group",
                search_by: "name",
                options: group_options,
                nullable: true,
            },
        },
        FieldSchema {
            name: "isAllowMultiple",
            label: field_label("product-property.fields.is_allow_multiple"),
            required: true,
            default: Some(json!(false)),
            kind: FieldKind::BooleanRadio,
        },
        FieldSchema {
            name: "isAllowAlias",
            label: field_label("product-property.fields.is_allow_alias"),
            required: true,
            default: Some(json!(false)),
            kind: FieldKind::BooleanRadio,
        },
        FieldSchema {
            name: "sort",
            label: field_label("product-property.fields.sort"),
            required: true,
            default: Some(json!(0)),
            kind: FieldKind::Integer,
        },
        FieldSchema {
            name: "status",
            label: field_label("product-property.fields.status"),
            required: true,
            default: Some(json!(PropertyStatus::default().value())),
            kind: FieldKind::Radio {
                options: PropertyStatus::options(),
            },
        },
    ]
}

/// Ordered list-table columns.
pub fn table_schema() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema {
            key: "id",
            label: field_label("product-property.fields.id"),
            kind: ColumnKind::Text {
                copyable: true,
                sortable: true,
                searchable: false,
                numeric: false,
            },
        },
        ColumnSchema {
            key: "group.name",
            label: field_label("product-property.fields.group.name"),
            kind: ColumnKind::Text {
                copyable: false,
                sortable: false,
                searchable: false,
                numeric: true,
            },
        },
        ColumnSchema {
            key: "type",
            label: field_label("product-property.fields.type"),
            kind: ColumnKind::Badge,
        },
        ColumnSchema {
            key: "name",
            label: field_label("product-property.fields.name"),
            kind: ColumnKind::Text {
                copyable: false,
                sortable: false,
                searchable: true,
                numeric: false,
            },
        },
        ColumnSchema {
            key: "unit",
            label: field_label("product-property.fields.unit"),
            kind: ColumnKind::plain_text(),
        },
        ColumnSchema {
            key: "isAllowMultiple",
            label: field_label("product-property.fields.is_allow_multiple"),
            kind: ColumnKind::BooleanIcon,
        },
        ColumnSchema {
            key: "isAllowAlias",
            label: field_label("product-property.fields.is_allow_alias"),
            kind: ColumnKind::BooleanIcon,
        },
        ColumnSchema {
            key: "sort",
            label: field_label("product-property.fields.sort"),
            kind: ColumnKind::Text {
                copyable: false,
                sortable: true,
                searchable: false,
                numeric: false,
            },
        },
        ColumnSchema {
            key: "status",
            label: field_label("product-property.fields.status"),
            kind: ColumnKind::Badge,
        },
    ]
}

/// The single built-in filter: soft-delete visibility.
pub fn filters() -> Vec<FilterSchema> {
    vec![FilterSchema {
        name: "trashed",
        label: field_label("product-property.filters.trashed"),
        options: vec![
            FilterOption {
                value: "withTrashed",
                label: "With trashed",
            },
            FilterOption {
                value: "onlyTrashed",
                label: "Only trashed",
            },
            FilterOption {
                value: "withoutTrashed",
                label: "Without trashed",
            },
        ],
    }]
}

pub fn row_actions() -> Vec<ActionSchema> {
    vec![
        ActionSchema {
            name: "view",
            label: field_label("product-property.actions.view"),
        },
        ActionSchema {
            name: "edit",
            label: field_label("product-property.actions.edit"),
        },
    ]
}

pub fn bulk_actions() -> Vec<ActionSchema> {
    vec![
        ActionSchema {
            name: "delete",
            label: field_label("product-property.actions.delete"),
        },
        ActionSchema {
            name: "forceDelete",
            label: field_label("product-property.actions.force-delete"),
        },
        ActionSchema {
            name: "restore",
            label: field_label("product-property.actions.restore"),
        },
    ]
}

/// Route map of the four logical pages.
pub fn routes() -> Vec<RouteDef> {
    vec![
        RouteDef {
            name: "index",
            path: INDEX_PATH,
        },
        RouteDef {
            name: "create",
            path: CREATE_PATH,
        },
        RouteDef {
            name: "view",
            path: VIEW_PATH,
        },
        RouteDef {
            name: "edit",
            path: EDIT_PATH,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_order_and_constraints() {
        let form = form_schema(vec![]);
        let names: Vec<&str> = form.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "type",
                "name",
                "description",
                "unit",
                "groupId",
                "isAllowMultiple",
                "isAllowAlias",
                "sort",
                "status"
            ]
        );

        assert!(form[0].required);
        assert_eq!(form[0].default, Some(json!("select")));
        assert_eq!(form[1].kind, FieldKind::Text { max_length: 255 });
        assert!(form[1].required);
        assert!(!form[2].required);
        assert_eq!(form[3].kind, FieldKind::Text { max_length: 10 });
        assert_eq!(form[7].default, Some(json!(0)));
        assert_eq!(form[8].default, Some(json!("enable")));
    }

    #[test]
    fn test_group_select_is_nullable_and_searchable_by_name() {
        let options = vec![GroupOption {
            value: 1,
            label: "Basic".to_string(),
        }];
        let form = form_schema(options.clone());
        match &form[4].kind {
            FieldKind::Select {
                relation,
                search_by,
                options: preloaded,
                nullable,
            } => {
                assert_eq!(*relation, "group");
                assert_eq!(*search_by, "name");
                assert_eq!(preloaded, &options);
                assert!(*nullable);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_table_column_order() {
        let columns = table_schema();
        let keys: Vec<&str> = columns.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "group.name",
                "type",
                "name",
                "unit",
                "isAllowMultiple",
                "isAllowAlias",
                "sort",
                "status"
            ]
        );
    }

    #[test]
    fn test_id_column_is_copyable_and_sortable() {
        let columns = table_schema();
        assert_eq!(
            columns[0].kind,
            ColumnKind::Text {
                copyable: true,
                sortable: true,
                searchable: false,
                numeric: false,
            }
        );
    }

    #[test]
    fn test_badge_columns() {
        let columns = table_schema();
        assert_eq!(columns[2].kind, ColumnKind::Badge);
        assert_eq!(columns[8].kind, ColumnKind::Badge);
    }

    #[test]
    fn test_record_url_disabled() {
        assert!(RECORD_URL.is_none());
    }

    #[test]
    fn test_route_map() {
        let routes = routes();
        let map: Vec<(&str, &str)> = routes.iter().map(|r| (r.name, r.path)).collect();
        assert_eq!(
            map,
            vec![
                ("index", ""),
                ("create", "/create"),
                ("view", "/{id}"),
                ("edit", "/{id}/edit"),
            ]
        );
    }

    #[test]
    fn test_filter_and_actions() {
        let filters = filters();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name, "trashed");
        assert_eq!(filters[0].options.len(), 3);

        let actions: Vec<&str> = row_actions().iter().map(|a| a.name).collect();
        assert_eq!(actions, vec!["view", "edit"]);

        let bulk: Vec<&str> = bulk_actions().iter().map(|a| a.name).collect();
        assert_eq!(bulk, vec!["delete", "forceDelete", "restore"]);
    }

    #[test]
    fn test_field_kind_serialization_shape() {
        let form = form_schema(vec![]);
        let json = serde_json::to_value(&form[0]).unwrap();
        assert_eq!(json["kind"], "radio");
        assert_eq!(json["name"], "type");
        assert!(json["options"].is_array());
    }
}
