use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{catalog::Catalog, matcher::Matcher};

/// Handles constructed once at startup and shared by every command.
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection.
    pub db: DatabaseConnection,
    /// Item catalog, read-only for the lifetime of the process.
    pub catalog: Arc<Catalog>,
    /// Matcher built over `catalog`.
    pub matcher: Arc<Matcher>,
    /// Upper bound for every storage operation.
    pub storage_timeout: std::time::Duration,
}

impl AppState {
    /// Creates the state, building the matcher over the given catalog.
    pub fn new(
        db: DatabaseConnection,
        catalog: Arc<Catalog>,
        storage_timeout: std::time::Duration,
    ) -> Self {
        let matcher = Arc::new(Matcher::new(catalog.clone()));

        Self {
            db,
            catalog,
            matcher,
            storage_timeout,
        }
    }
}
