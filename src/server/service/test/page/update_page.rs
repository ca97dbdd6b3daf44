use super::*;

/// Tests that a slug change colliding with another live page is rejected,
/// while keeping the page's own slug passes.
///
/// Expected: Err(BadRequest) for the collision, Ok for the no-op slug
#[tokio::test]
async fn slug_change_is_checked_against_other_pages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;
    factory::page::PageFactory::new(db, site.id)
        .slug("first")
        .build()
        .await?;
    let second = factory::page::PageFactory::new(db, site.id)
        .slug("second")
        .build()
        .await?;

    let service = PageService::new(db);

    let err = service
        .update_page(
            second.id,
            UpdatePageParam {
                slug: Some("first".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let updated = service
        .update_page(
            second.id,
            UpdatePageParam {
                slug: Some("second".to_string()),
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.slug, "second");
    assert_eq!(updated.title, "Renamed");

    Ok(())
}

/// Tests that updating a soft-deleted page fails.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn cannot_update_deleted_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;
    let page = factory::page::create_page(db, site.id).await?;

    let service = PageService::new(db);
    service.delete_page(page.id).await?;

    let err = service
        .update_page(
            page.id,
            UpdatePageParam {
                title: Some("Too late".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
