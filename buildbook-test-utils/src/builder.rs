//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// build fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_build_tables: bool,

    // Database fixtures to insert
    builds: Vec<(String, String, Vec<String>)>, // (champion, author, item_ids)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_build_tables: false,
            builds: Vec::new(),
        }
    }

    /// Add the tables required to store champion builds.
    pub fn with_build_tables(mut self) -> Self {
        self.include_build_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a build into the database.
    ///
    /// The build is stored as given, champion and author are not normalized. Requires
    /// `with_build_tables` or an equivalent `with_table` call.
    ///
    /// # Arguments
    /// - `champion` - Champion column value
    /// - `author` - Author column value
    /// - `item_ids` - Ordered item ids
    pub fn with_build(mut self, champion: &str, author: &str, item_ids: &[&str]) -> Self {
        self.builds.push((
            champion.to_string(),
            author.to_string(),
            item_ids.iter().map(|id| id.to_string()).collect(),
        ));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_build_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::ChampionBuild));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for (champion, author, item_ids) in self.builds {
            setup
                .builds()
                .insert_mock_build(&champion, &author, item_ids.as_slice())
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
