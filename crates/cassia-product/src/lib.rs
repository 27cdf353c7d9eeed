pub mod command;
pub mod enums;
pub mod service;
pub mod validation;
