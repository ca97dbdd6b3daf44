use super::*;

/// Tests that a soft delete stamps `deleted_at` and keeps the row.
///
/// Expected: the row survives with `deleted_at` set
#[tokio::test]
async fn soft_delete_keeps_tombstone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::site::SiteFactory::new(db)
        .subdomain("doomed")
        .build()
        .await?;

    let repo = SiteRepository::new(db);
    repo.soft_delete(created.id).await?;

    let found = repo.find_by_subdomain("doomed").await?;
    assert!(found.is_some());
    assert!(found.unwrap().deleted_at.is_some());

    Ok(())
}

/// Tests that a hard delete removes the row entirely.
///
/// Expected: the subdomain no longer resolves
#[tokio::test]
async fn hard_delete_removes_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::site::SiteFactory::new(db)
        .subdomain("gone")
        .build()
        .await?;

    let repo = SiteRepository::new(db);
    repo.delete_hard(created.id).await?;

    let found = repo.find_by_subdomain("gone").await?;
    assert!(found.is_none());

    Ok(())
}
