pub mod property_command;
pub mod property_query;
