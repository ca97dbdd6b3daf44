use super::*;

/// Tests that the slug defaults to a slugified title.
///
/// Expected: Ok with slug "hello-world"
#[tokio::test]
async fn slug_defaults_to_slugified_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;

    let page = PageService::new(db)
        .create_page(
            site.id,
            "Hello World!".to_string(),
            None,
            None,
            "First post.".to_string(),
            PageKind::Post,
            true,
            None,
        )
        .await?;

    assert_eq!(page.slug, "hello-world");

    Ok(())
}

/// Tests that a duplicate slug within a site is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;
    factory::page::PageFactory::new(db, site.id)
        .slug("taken")
        .build()
        .await?;

    let err = PageService::new(db)
        .create_page(
            site.id,
            "Another".to_string(),
            Some("taken".to_string()),
            None,
            "Body.".to_string(),
            PageKind::Post,
            true,
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));

    Ok(())
}

/// Tests that a title with no sluggable characters is rejected when no slug
/// is provided.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;

    let err = PageService::new(db)
        .create_page(
            site.id,
            "!!!".to_string(),
            None,
            None,
            "Body.".to_string(),
            PageKind::Post,
            true,
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));

    Ok(())
}
