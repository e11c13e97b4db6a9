//! Champion build repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::champion_build::{encode_item_ids, Column};

#[cfg(test)]
mod tests;

/// Queries over the `champion_build` table.
pub struct BuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuildRepository<'a, C> {
    /// Creates a new instance of [`BuildRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a build, stamping it with the current time
    pub async fn create<S: AsRef<str>>(
        &self,
        champion: &str,
        author: &str,
        item_ids: &[S],
    ) -> Result<entity::champion_build::Model, DbErr> {
        let build = entity::champion_build::ActiveModel {
            champion: ActiveValue::Set(champion.to_string()),
            item_ids: ActiveValue::Set(encode_item_ids(item_ids)),
            author: ActiveValue::Set(author.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        build.insert(self.db).await
    }

    /// Gets every build for a champion, oldest first
    pub async fn get_by_champion(
        &self,
        champion: &str,
    ) -> Result<Vec<entity::champion_build::Model>, DbErr> {
        entity::prelude::ChampionBuild::find()
            .filter(Column::Champion.eq(champion))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every build of a champion recorded by the given author
    ///
    /// Returns OK regardless of any build existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_champion_and_author(
        &self,
        champion: &str,
        author: &str,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::ChampionBuild::delete_many()
            .filter(Column::Champion.eq(champion))
            .filter(Column::Author.eq(author))
            .exec(self.db)
            .await
    }
}
