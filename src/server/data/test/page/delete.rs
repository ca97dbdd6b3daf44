use super::*;

/// Tests that a soft-deleted page disappears from listings and slug lookups
/// while the row itself survives.
///
/// Expected: listing total drops to zero, slug is free, id lookup still
/// returns the tombstone
#[tokio::test]
async fn soft_delete_hides_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;
    let created = factory::page::PageFactory::new(db, site.id)
        .slug("fleeting")
        .build()
        .await?;

    let repo = PageRepository::new(db);
    repo.soft_delete(created.id).await?;

    let (pages, total) = repo
        .get_by_site(GetPagesParam {
            site_id: site.id,
            kind: None,
            visibility: PageVisibility::All,
            page: 0,
            per_page: 10,
        })
        .await?;
    assert_eq!(total, 0);
    assert!(pages.is_empty());

    let by_slug = repo.find_by_slug(site.id, "fleeting").await?;
    assert!(by_slug.is_none());

    let by_id = repo.find_by_id(created.id).await?;
    assert!(by_id.is_some());
    assert!(by_id.unwrap().deleted_at.is_some());

    Ok(())
}
