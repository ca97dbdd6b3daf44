use chrono::{Duration, Utc};

use super::*;

/// Seeds one published, one scheduled, and one draft post on a fresh site.
async fn seed_mixed_posts(db: &sea_orm::DatabaseConnection) -> Result<i32, AppError> {
    let site = factory::site::create_site(db).await?;

    factory::page::PageFactory::new(db, site.id)
        .slug("live")
        .published_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::page::PageFactory::new(db, site.id)
        .slug("upcoming")
        .published_at(Utc::now() + Duration::hours(1))
        .build()
        .await?;
    factory::page::PageFactory::new(db, site.id)
        .slug("draft")
        .published(false)
        .build()
        .await?;

    Ok(site.id)
}

/// Tests that visibility filters partition the rows.
///
/// Expected: published/scheduled/draft each match exactly one of the three
/// seeded posts, and `All` matches all of them
#[tokio::test]
async fn visibility_filters_partition_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site_id = seed_mixed_posts(db).await?;
    let repo = PageRepository::new(db);

    let cases = [
        (PageVisibility::All, 3, None),
        (PageVisibility::Published, 1, Some("live")),
        (PageVisibility::Scheduled, 1, Some("upcoming")),
        (PageVisibility::Draft, 1, Some("draft")),
    ];

    for (visibility, expected_total, expected_slug) in cases {
        let (pages, total) = repo
            .get_by_site(GetPagesParam {
                site_id,
                kind: Some(PageKind::Post),
                visibility,
                page: 0,
                per_page: 10,
            })
            .await?;

        assert_eq!(total, expected_total, "total for {:?}", visibility);
        if let Some(slug) = expected_slug {
            assert_eq!(pages[0].slug, slug, "slug for {:?}", visibility);
        }
    }

    Ok(())
}

/// Tests that the type filter separates posts from static pages.
///
/// Expected: the static page is only visible without the post filter
#[tokio::test]
async fn type_filter_excludes_other_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;
    factory::page::PageFactory::new(db, site.id)
        .slug("a-post")
        .build()
        .await?;
    factory::page::PageFactory::new(db, site.id)
        .slug("a-page")
        .kind("page")
        .build()
        .await?;

    let repo = PageRepository::new(db);

    let (_, posts_only) = repo
        .get_by_site(GetPagesParam {
            site_id: site.id,
            kind: Some(PageKind::Post),
            visibility: PageVisibility::All,
            page: 0,
            per_page: 10,
        })
        .await?;
    assert_eq!(posts_only, 1);

    let (_, both) = repo
        .get_by_site(GetPagesParam {
            site_id: site.id,
            kind: None,
            visibility: PageVisibility::All,
            page: 0,
            per_page: 10,
        })
        .await?;
    assert_eq!(both, 2);

    Ok(())
}

/// Tests the pagination window.
///
/// Expected: two rows on the first page, one on the second, total of three
#[tokio::test]
async fn paginates_results() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site_id = seed_mixed_posts(db).await?;
    let repo = PageRepository::new(db);

    let (first, total) = repo
        .get_by_site(GetPagesParam {
            site_id,
            kind: None,
            visibility: PageVisibility::All,
            page: 0,
            per_page: 2,
        })
        .await?;
    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);

    let (second, _) = repo
        .get_by_site(GetPagesParam {
            site_id,
            kind: None,
            visibility: PageVisibility::All,
            page: 1,
            per_page: 2,
        })
        .await?;
    assert_eq!(second.len(), 1);

    Ok(())
}
