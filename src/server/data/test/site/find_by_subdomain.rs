use super::*;

/// Tests finding a live site by subdomain.
///
/// Expected: Ok(Some(Site)) from both the plain and the active lookup
#[tokio::test]
async fn finds_live_site() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::site::SiteFactory::new(db)
        .subdomain("living")
        .build()
        .await?;

    let repo = SiteRepository::new(db);

    let found = repo.find_by_subdomain("living").await?;
    assert_eq!(found.as_ref().map(|s| s.id), Some(created.id));

    let active = repo.find_active_by_subdomain("living").await?;
    assert_eq!(active.map(|s| s.id), Some(created.id));

    Ok(())
}

/// Tests that soft-deleted sites are visible to the plain lookup only.
///
/// The availability check needs to see tombstones while public reads must
/// not.
///
/// Expected: plain lookup returns the tombstone, active lookup returns None
#[tokio::test]
async fn soft_deleted_site_is_hidden_from_active_lookup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site::SiteFactory::new(db)
        .subdomain("ghost")
        .deleted()
        .build()
        .await?;

    let repo = SiteRepository::new(db);

    let found = repo.find_by_subdomain("ghost").await?;
    assert!(found.is_some());
    assert!(found.unwrap().deleted_at.is_some());

    let active = repo.find_active_by_subdomain("ghost").await?;
    assert!(active.is_none());

    Ok(())
}

/// Tests querying for an unknown subdomain.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_subdomain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteRepository::new(db);
    let found = repo.find_by_subdomain("missing").await?;

    assert!(found.is_none());

    Ok(())
}
