//! Tests for BuildRepository::create method.

use sea_orm::EntityTrait;

use super::*;

/// Expect success when creating a new build
#[tokio::test]
async fn creates_build() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_tables().build().await?;

    let build_repo = BuildRepository::new(&test.db);
    let result = build_repo.create("ashe", "usera", &["3111", "3135"]).await;

    assert!(result.is_ok());
    let build = result.unwrap();
    assert_eq!(build.champion, "ashe");
    assert_eq!(build.author, "usera");
    assert_eq!(build.item_ids(), vec!["3111", "3135"]);

    Ok(())
}

/// Expect item order to be kept exactly as given
#[tokio::test]
async fn preserves_item_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_tables().build().await?;

    let item_ids = ["3135", "3089", "3111", "3020"];
    let build_repo = BuildRepository::new(&test.db);
    let created = build_repo.create("lux", "usera", &item_ids).await?;

    let stored = entity::prelude::ChampionBuild::find_by_id(created.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.item_ids(), item_ids);

    Ok(())
}

/// Expect every build to get its own row, identical builds are not deduplicated
#[tokio::test]
async fn stores_identical_builds_separately() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_tables().build().await?;

    let build_repo = BuildRepository::new(&test.db);
    let first = build_repo.create("ashe", "usera", &["3111"]).await?;
    let second = build_repo.create("ashe", "usera", &["3111"]).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(test.builds().count_builds("ashe", "usera").await?, 2);

    Ok(())
}

/// Expect Error when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let build_repo = BuildRepository::new(&test.db);
    let result = build_repo.create("ashe", "usera", &["3111"]).await;

    assert!(result.is_err());

    Ok(())
}
