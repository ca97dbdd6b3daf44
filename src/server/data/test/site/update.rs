use super::*;

/// Tests that only provided fields are written.
///
/// Expected: Ok with the name and description updated and the subdomain
/// untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::site::SiteFactory::new(db)
        .subdomain("steady")
        .name("Before")
        .build()
        .await?;

    let repo = SiteRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateSiteParam {
                name: Some("After".to_string()),
                description: Some("A description".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "After");
    assert_eq!(updated.description.as_deref(), Some("A description"));
    assert_eq!(updated.subdomain, "steady");

    Ok(())
}

/// Tests replacing the navigation list.
///
/// Expected: Ok with the new navigation stored and parsed back
#[tokio::test]
async fn replaces_navigation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::site::create_site(db).await?;

    let repo = SiteRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateSiteParam {
                navigation: Some(sample_navigation()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.navigation.len(), 2);
    assert_eq!(updated.navigation[0].label, "About");

    Ok(())
}
