use super::*;

/// Tests that only the owner can update a site.
///
/// Expected: Err(AccessDenied) for a user without an owner membership
#[tokio::test]
async fn non_owner_cannot_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = SiteService::new(db);
    let site = service
        .create_site(owner.id, "My Blog".to_string(), "my-blog".to_string())
        .await?;

    let err = service
        .update_site(
            stranger.id,
            site.id,
            UpdateSiteParam {
                name: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied { .. })
    ));

    Ok(())
}

/// Tests that a subdomain change is validated against other sites.
///
/// Expected: Err(SubdomainTaken) for a claimed subdomain, Ok when the site
/// keeps its own
#[tokio::test]
async fn subdomain_change_is_rechecked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site::SiteFactory::new(db)
        .subdomain("claimed")
        .build()
        .await?;

    let owner = factory::user::create_user(db).await?;
    let service = SiteService::new(db);
    let site = service
        .create_site(owner.id, "My Blog".to_string(), "my-blog".to_string())
        .await?;

    let err = service
        .update_site(
            owner.id,
            site.id,
            UpdateSiteParam {
                subdomain: Some("claimed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::SiteErr(SiteError::SubdomainTaken)));

    let updated = service
        .update_site(
            owner.id,
            site.id,
            UpdateSiteParam {
                subdomain: Some("my-blog".to_string()),
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.subdomain, "my-blog");
    assert_eq!(updated.name, "Renamed");

    Ok(())
}

/// Tests that only the owner can delete a site, and that deletion is soft.
///
/// Expected: Err(AccessDenied) for a stranger; after the owner deletes, the
/// tombstone row keeps the subdomain reserved
#[tokio::test]
async fn delete_is_owner_gated_and_soft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = SiteService::new(db);
    let site = service
        .create_site(owner.id, "My Blog".to_string(), "my-blog".to_string())
        .await?;

    let err = service
        .delete_site(stranger.id, site.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied { .. })
    ));

    service.delete_site(owner.id, site.id).await?;

    let row = entity::prelude::Site::find_by_id(site.id).one(db).await?;
    assert!(row.is_some());
    assert!(row.unwrap().deleted_at.is_some());

    Ok(())
}
