//! Display label lookup keyed by fixed translation identifiers.
//!
//! Unknown keys fall back to the key itself so a missing entry stays visible
//! instead of rendering an empty label.

pub fn trans(key: &str) -> &str {
    match key {
        "product-property.labels.product-property" => "Product Property",
        "product-property.fields.id" => "ID",
        "product-property.fields.type" => "Type",
        "product-property.fields.name" => "Name",
        "product-property.fields.description" => "Description",
        "product-property.fields.unit" => "Unit",
        "product-property.fields.group.name" => "Group",
        "product-property.fields.is_allow_multiple" => "Allow Multiple",
        "product-property.fields.is_allow_alias" => "Allow Alias",
        "product-property.fields.sort" => "Sort",
        "product-property.fields.status" => "Status",
        "product-property.filters.trashed" => "Trashed",
        "product-property.actions.view" => "View",
        "product-property.actions.edit" => "Edit",
        "product-property.actions.delete" => "Delete",
        "product-property.actions.force-delete" => "Force Delete",
        "product-property.actions.restore" => "Restore",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        assert_eq!(trans("product-property.fields.name"), "Name");
        assert_eq!(trans("product-property.fields.group.name"), "Group");
        assert_eq!(trans("product-property.actions.force-delete"), "Force Delete");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(trans("product-property.fields.missing"), "product-property.fields.missing");
    }
}
