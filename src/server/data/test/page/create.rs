use chrono::Utc;

use super::*;

/// Tests creating a page and resolving it by slug.
///
/// Expected: Ok with the stored fields and a successful slug lookup
#[tokio::test]
async fn creates_page_and_finds_by_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;

    let repo = PageRepository::new(db);
    let page = repo
        .create(CreatePageParam {
            site_id: site.id,
            title: "Hello World".to_string(),
            slug: "hello-world".to_string(),
            excerpt: Some("A first post".to_string()),
            content: "Welcome to my site.".to_string(),
            kind: PageKind::Post,
            published: true,
            published_at: Utc::now(),
        })
        .await?;

    assert_eq!(page.title, "Hello World");
    assert_eq!(page.kind, PageKind::Post);

    let found = repo.find_by_slug(site.id, "hello-world").await?;
    assert_eq!(found.map(|p| p.id), Some(page.id));

    Ok(())
}

/// Tests that slug lookup is scoped to the site.
///
/// Expected: the same slug on another site does not resolve
#[tokio::test]
async fn slug_lookup_is_per_site() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site_a = factory::site::create_site(db).await?;
    let site_b = factory::site::create_site(db).await?;
    factory::page::PageFactory::new(db, site_a.id)
        .slug("shared")
        .build()
        .await?;

    let repo = PageRepository::new(db);
    let found = repo.find_by_slug(site_b.id, "shared").await?;

    assert!(found.is_none());

    Ok(())
}
