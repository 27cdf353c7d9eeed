pub mod product_property;
pub mod product_property_group;
