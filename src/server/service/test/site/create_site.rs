use super::*;

/// Tests that site creation seeds exactly two pages and two navigation
/// entries.
///
/// Expected: About and Archives pages exist, navigation mirrors them
#[tokio::test]
async fn seeds_two_pages_and_navigation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let site = SiteService::new(db)
        .create_site(user.id, "My Blog".to_string(), "my-blog".to_string())
        .await?;

    assert_eq!(site.navigation.len(), 2);
    assert_eq!(site.navigation[0].label, "About");
    assert_eq!(site.navigation[0].url, "/about");
    assert_eq!(site.navigation[1].label, "Archives");
    assert_eq!(site.navigation[1].url, "/archives");

    let pages = entity::prelude::Page::find()
        .filter(entity::page::Column::SiteId.eq(site.id))
        .all(db)
        .await?;
    assert_eq!(pages.len(), 2);

    let mut slugs: Vec<_> = pages.iter().map(|p| p.slug.as_str()).collect();
    slugs.sort();
    assert_eq!(slugs, vec!["about", "archives"]);
    assert!(pages.iter().all(|p| p.published));

    Ok(())
}

/// Tests that the creator becomes the site's owner.
///
/// Expected: one owner membership linking user and site
#[tokio::test]
async fn creates_owner_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let site = SiteService::new(db)
        .create_site(user.id, "My Blog".to_string(), "my-blog".to_string())
        .await?;

    let memberships = entity::prelude::Membership::find()
        .filter(entity::membership::Column::SiteId.eq(site.id))
        .filter(entity::membership::Column::Role.eq("owner"))
        .all(db)
        .await?;

    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].user_id, user.id);

    Ok(())
}

/// Tests that creation fails for a subdomain held by another live site.
///
/// Expected: Err(SubdomainTaken) and no second site created
#[tokio::test]
async fn fails_for_taken_subdomain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site::SiteFactory::new(db)
        .subdomain("claimed")
        .build()
        .await?;
    let user = factory::user::create_user(db).await?;

    let err = SiteService::new(db)
        .create_site(user.id, "Usurper".to_string(), "claimed".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::SiteErr(SiteError::SubdomainTaken)));

    let count = entity::prelude::Site::find()
        .filter(entity::site::Column::Subdomain.eq("claimed"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that creation fails for a reserved subdomain.
///
/// Expected: Err(ReservedSubdomain)
#[tokio::test]
async fn fails_for_reserved_subdomain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let err = SiteService::new(db)
        .create_site(user.id, "Sneaky".to_string(), "www".to_string())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::SiteErr(SiteError::ReservedSubdomain(_))
    ));

    Ok(())
}

/// Tests that a soft-deleted site's subdomain can be claimed by a new site.
///
/// Expected: Ok, with exactly one live site left under the subdomain
#[tokio::test]
async fn reuses_soft_deleted_subdomain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site::SiteFactory::new(db)
        .subdomain("legacy")
        .deleted()
        .build()
        .await?;
    let user = factory::user::create_user(db).await?;

    let site = SiteService::new(db)
        .create_site(user.id, "Successor".to_string(), "legacy".to_string())
        .await?;

    assert!(site.deleted_at.is_none());

    let count = entity::prelude::Site::find()
        .filter(entity::site::Column::Subdomain.eq("legacy"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
