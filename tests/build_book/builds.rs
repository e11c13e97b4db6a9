use buildbook::service::build::BuildService;
use buildbook_test_utils::prelude::*;
use futures::future::join_all;

use super::{mock_catalog, TEST_STORAGE_TIMEOUT};

/// Expect a stored build to come back with its ids in order and a normalized owner
#[tokio::test]
async fn add_then_get_round_trips() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_tables().build().await?;
    let catalog = mock_catalog();
    let build_service = BuildService::new(&test.db, &catalog, TEST_STORAGE_TIMEOUT);

    build_service
        .add_build("ashe", "userA", &[MERCURYS_TREADS_ID, VOID_STAFF_ID])
        .await
        .expect("build is valid");
    let builds = build_service.get_builds("ashe").await.expect("lookup succeeds");

    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].item_ids, vec![MERCURYS_TREADS_ID, VOID_STAFF_ID]);
    assert_eq!(builds[0].owner, "usera");

    Ok(())
}

/// Expect a delete to leave other owners' builds in place
#[tokio::test]
async fn delete_is_scoped_to_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_tables().build().await?;
    let catalog = mock_catalog();
    let build_service = BuildService::new(&test.db, &catalog, TEST_STORAGE_TIMEOUT);

    build_service
        .add_build("ashe", "usera", &[MERCURYS_TREADS_ID])
        .await
        .expect("build is valid");
    build_service
        .add_build("ashe", "userb", &[RABADONS_DEATHCAP_ID])
        .await
        .expect("build is valid");

    let removed = build_service
        .delete_builds("ashe", "usera")
        .await
        .expect("delete succeeds");
    assert_eq!(removed, 1);

    let remaining = build_service.get_builds("ashe").await.expect("lookup succeeds");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].owner, "userb");
    assert_eq!(remaining[0].item_ids, vec![RABADONS_DEATHCAP_ID]);

    Ok(())
}

/// Expect a repeated delete to remove nothing
#[tokio::test]
async fn delete_twice_returns_zero() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_build_tables()
        .with_build("ashe", "usera", &[MERCURYS_TREADS_ID])
        .with_build("ashe", "usera", &[VOID_STAFF_ID])
        .build()
        .await?;
    let catalog = mock_catalog();
    let build_service = BuildService::new(&test.db, &catalog, TEST_STORAGE_TIMEOUT);

    assert_eq!(build_service.delete_builds("ashe", "usera").await.ok(), Some(2));
    assert_eq!(build_service.delete_builds("ashe", "usera").await.ok(), Some(0));

    Ok(())
}

/// Expect concurrent adds to all be stored
#[tokio::test]
async fn concurrent_adds_are_all_stored() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_tables().build().await?;
    let catalog = mock_catalog();
    let build_service = BuildService::new(&test.db, &catalog, TEST_STORAGE_TIMEOUT);

    let owners = ["usera", "userb", "userc", "userd"];
    let item_ids = [VOID_STAFF_ID];
    let results = join_all(
        owners
            .iter()
            .map(|owner| build_service.add_build("ashe", owner, &item_ids)),
    )
    .await;

    assert!(results.iter().all(|result| result.is_ok()));
    let builds = build_service.get_builds("ashe").await.expect("lookup succeeds");
    assert_eq!(builds.len(), owners.len());

    Ok(())
}
