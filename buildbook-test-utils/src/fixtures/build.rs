use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use entity::champion_build::{encode_item_ids, Column};

use crate::{error::TestError, TestContext};

impl TestContext {
    /// Access fixtures for the `champion_build` table
    pub fn builds<'a>(&'a self) -> BuildFixtures<'a> {
        BuildFixtures { setup: self }
    }
}

/// Inserts and inspects champion build rows directly, without going through the service.
pub struct BuildFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> BuildFixtures<'a> {
    /// Inserts a build row as given, bypassing validation
    pub async fn insert_mock_build<S: AsRef<str>>(
        &self,
        champion: &str,
        author: &str,
        item_ids: &[S],
    ) -> Result<entity::champion_build::Model, TestError> {
        Ok(
            entity::prelude::ChampionBuild::insert(entity::champion_build::ActiveModel {
                champion: ActiveValue::Set(champion.to_string()),
                item_ids: ActiveValue::Set(encode_item_ids(item_ids)),
                author: ActiveValue::Set(author.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Counts stored builds for a champion and author
    pub async fn count_builds(&self, champion: &str, author: &str) -> Result<u64, TestError> {
        Ok(entity::prelude::ChampionBuild::find()
            .filter(Column::Champion.eq(champion))
            .filter(Column::Author.eq(author))
            .count(&self.setup.db)
            .await?)
    }
}
