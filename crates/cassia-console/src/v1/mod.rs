pub mod health;
pub mod property;
pub mod router;
