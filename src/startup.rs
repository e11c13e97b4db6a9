//! Process startup: storage connection and catalog loading.

use std::{sync::Arc, time::Duration};

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{catalog::Catalog, config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .min_connections(1)
        .connect_timeout(config.storage_timeout)
        .acquire_timeout(config.storage_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::info!("Connected to database");

    Migrator::up(&db, None).await?;
    tracing::info!("Applied database migrations");

    Ok(db)
}

/// Load the item catalog shared by every command
pub fn load_catalog(config: &Config) -> Result<Arc<Catalog>, Error> {
    let catalog = Catalog::from_path(&config.catalog_path)?;
    tracing::info!(
        "Loaded item catalog with {} items from {}",
        catalog.len(),
        config.catalog_path.display()
    );

    Ok(Arc::new(catalog))
}
