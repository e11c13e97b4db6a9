//! Domain models shared between layers.

/// Shared application state.
pub mod app;
/// Stored champion builds.
pub mod build;
/// Catalog items.
pub mod catalog;
/// Aliases for database entity models.
pub mod db;
