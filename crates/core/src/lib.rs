//! Domain types shared by the store and the HTTP layer.

pub mod error;
pub mod schema;
pub mod show;
pub mod types;
