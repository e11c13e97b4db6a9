//! Build service layer.
//!
//! Records, lists and deletes champion builds. Champion and author names are normalized
//! here so the repository only ever sees comparison-stable values, and every item id is
//! checked against the catalog before anything is written.

#[cfg(test)]
mod tests;

use std::time::Duration;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    catalog::Catalog,
    data::build::BuildRepository,
    error::{build::BuildError, Error},
    model::{
        app::AppState,
        build::{normalize_key, Build},
    },
    util::timeout::with_storage_timeout,
};

/// Service for managing champion builds.
///
/// Retrieval is open to everyone while deletion is scoped to the author of a build.
/// Failed storage calls are not retried.
pub struct BuildService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
    timeout: Duration,
}

impl<'a> BuildService<'a> {
    /// Creates a new instance of BuildService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `catalog` - Catalog used to validate item ids
    /// - `timeout` - Upper bound for each storage call
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog, timeout: Duration) -> Self {
        Self {
            db,
            catalog,
            timeout,
        }
    }

    /// Creates a service using the handles held by the application state.
    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.db, &state.catalog, state.storage_timeout)
    }

    /// Records a new build for a champion.
    ///
    /// # Arguments
    /// - `subject` - Champion name, normalized before storage
    /// - `owner` - Identity of the author, normalized before storage
    /// - `item_ids` - Ordered, non-empty list of catalog item ids
    ///
    /// # Returns
    /// - `Ok(Build)` - The stored build
    /// - `Err(Error::Validation)` - Empty item list, empty subject or owner, or unknown item id
    /// - `Err(Error::StorageUnavailable)` - Backend unreachable or timed out
    /// - `Err(Error::DbErr)` - Other database failure
    pub async fn add_build<S: AsRef<str>>(
        &self,
        subject: &str,
        owner: &str,
        item_ids: &[S],
    ) -> Result<Build, Error> {
        let subject = normalize_key(subject);
        let owner = normalize_key(owner);

        if subject.is_empty() {
            return Err(BuildError::EmptySubject.into());
        }
        if owner.is_empty() {
            return Err(BuildError::EmptyOwner.into());
        }
        if item_ids.is_empty() {
            return Err(BuildError::EmptyItemIds.into());
        }
        if let Some(unknown) = item_ids
            .iter()
            .map(AsRef::as_ref)
            .find(|id| !self.catalog.contains(id))
        {
            return Err(BuildError::UnknownItemId(unknown.to_string()).into());
        }

        let build_repo = BuildRepository::new(self.db);
        let model = with_storage_timeout(
            "add build",
            self.timeout,
            build_repo.create(&subject, &owner, item_ids),
        )
        .await?;

        tracing::info!(
            "Recorded build {} for {} by {} with {} items",
            model.id,
            subject,
            owner,
            item_ids.len()
        );

        Ok(Build::from(model))
    }

    /// Lists every build recorded for a champion, by any author.
    ///
    /// # Returns
    /// - `Ok(Vec<Build>)` - Builds oldest first, empty when none exist
    /// - `Err(Error::Validation)` - Subject is empty
    /// - `Err(Error::StorageUnavailable)` - Backend unreachable or timed out
    /// - `Err(Error::DbErr)` - Other database failure
    pub async fn get_builds(&self, subject: &str) -> Result<Vec<Build>, Error> {
        let subject = normalize_key(subject);
        if subject.is_empty() {
            return Err(BuildError::EmptySubject.into());
        }

        let build_repo = BuildRepository::new(self.db);
        let models = with_storage_timeout(
            "get builds",
            self.timeout,
            build_repo.get_by_champion(&subject),
        )
        .await?;

        Ok(models.into_iter().map(Build::from).collect())
    }

    /// Deletes every build the owner recorded for a champion.
    ///
    /// Builds of other authors are never touched. Calling this again right after returns 0.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of builds removed
    /// - `Err(Error::Validation)` - Subject or owner is empty
    /// - `Err(Error::StorageUnavailable)` - Backend unreachable or timed out
    /// - `Err(Error::DbErr)` - Other database failure
    pub async fn delete_builds(&self, subject: &str, owner: &str) -> Result<u64, Error> {
        let subject = normalize_key(subject);
        let owner = normalize_key(owner);

        if subject.is_empty() {
            return Err(BuildError::EmptySubject.into());
        }
        if owner.is_empty() {
            return Err(BuildError::EmptyOwner.into());
        }

        let build_repo = BuildRepository::new(self.db);
        let result = with_storage_timeout(
            "delete builds",
            self.timeout,
            build_repo.delete_by_champion_and_author(&subject, &owner),
        )
        .await?;

        if result.rows_affected > 0 {
            tracing::info!(
                "Deleted {} builds for {} by {}",
                result.rows_affected,
                subject,
                owner
            );
        }

        Ok(result.rows_affected)
    }
}
