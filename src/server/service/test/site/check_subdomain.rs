use super::*;

/// Tests that reserved words are rejected regardless of other input.
///
/// Expected: Err(ReservedSubdomain) even with an updating site id
#[tokio::test]
async fn rejects_reserved_words() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SiteService::new(db);

    let err = service.check_subdomain("dashboard", None).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::SiteErr(SiteError::ReservedSubdomain(_))
    ));

    let err = service
        .check_subdomain("api", Some(42))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::SiteErr(SiteError::ReservedSubdomain(_))
    ));

    Ok(())
}

/// Tests that an unclaimed subdomain passes.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_available_subdomain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SiteService::new(db).check_subdomain("fresh", None).await?;

    Ok(())
}

/// Tests that a subdomain held by another live site is rejected.
///
/// Expected: Err(SubdomainTaken)
#[tokio::test]
async fn rejects_taken_subdomain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site::SiteFactory::new(db)
        .subdomain("claimed")
        .build()
        .await?;

    let err = SiteService::new(db)
        .check_subdomain("claimed", None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::SiteErr(SiteError::SubdomainTaken)));

    Ok(())
}

/// Tests that a site keeps its own subdomain during an update.
///
/// Expected: Ok(()) when the updating site already holds the subdomain, and
/// Err(SubdomainTaken) for any other site
#[tokio::test]
async fn allows_own_subdomain_when_updating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::SiteFactory::new(db)
        .subdomain("mine")
        .build()
        .await?;

    let service = SiteService::new(db);

    service.check_subdomain("mine", Some(site.id)).await?;

    let err = service
        .check_subdomain("mine", Some(site.id + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::SiteErr(SiteError::SubdomainTaken)));

    Ok(())
}

/// Tests that a soft-deleted site's subdomain becomes available for reuse.
///
/// The check hard-deletes the tombstone row, so afterwards the subdomain is
/// genuinely free.
///
/// Expected: Ok(()) and the tombstone row is gone
#[tokio::test]
async fn reclaims_soft_deleted_subdomain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tombstone = factory::site::SiteFactory::new(db)
        .subdomain("phoenix")
        .deleted()
        .build()
        .await?;

    SiteService::new(db).check_subdomain("phoenix", None).await?;

    let remaining = entity::prelude::Site::find_by_id(tombstone.id)
        .one(db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}
