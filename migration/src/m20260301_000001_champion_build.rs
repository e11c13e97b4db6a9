use sea_orm_migration::{prelude::*, schema::*};

static IDX_CHAMPION_BUILD_CHAMPION: &str = "idx-champion_build-champion";
static IDX_CHAMPION_BUILD_CHAMPION_AUTHOR: &str = "idx-champion_build-champion-author";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChampionBuild::Table)
                    .if_not_exists()
                    .col(pk_auto(ChampionBuild::Id))
                    .col(string(ChampionBuild::Champion))
                    .col(text(ChampionBuild::ItemIds))
                    .col(string(ChampionBuild::Author))
                    .col(timestamp(ChampionBuild::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAMPION_BUILD_CHAMPION)
                    .table(ChampionBuild::Table)
                    .col(ChampionBuild::Champion)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAMPION_BUILD_CHAMPION_AUTHOR)
                    .table(ChampionBuild::Table)
                    .col(ChampionBuild::Champion)
                    .col(ChampionBuild::Author)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAMPION_BUILD_CHAMPION_AUTHOR)
                    .table(ChampionBuild::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAMPION_BUILD_CHAMPION)
                    .table(ChampionBuild::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChampionBuild::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ChampionBuild {
    Table,
    Id,
    Champion,
    ItemIds,
    Author,
    CreatedAt,
}
