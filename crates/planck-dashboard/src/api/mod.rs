//! API endpoint handlers.

pub mod circuits;
pub mod health;
pub mod templates;
