use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::*;

/// Tests creating a site together with its owner membership.
///
/// Verifies that the repository inserts the site row and an `owner`
/// membership linking it to the provided user.
///
/// Expected: Ok with site fields stored and one owner membership row
#[tokio::test]
async fn creates_site_with_owner_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SiteRepository::new(db);
    let site = repo
        .create(CreateSiteParam {
            owner_user_id: user.id,
            name: "My Blog".to_string(),
            subdomain: "my-blog".to_string(),
            navigation: sample_navigation(),
        })
        .await?;

    assert_eq!(site.subdomain, "my-blog");
    assert_eq!(site.name, "My Blog");
    assert_eq!(site.navigation.len(), 2);
    assert!(site.deleted_at.is_none());

    let memberships = entity::prelude::Membership::find()
        .filter(entity::membership::Column::SiteId.eq(site.id))
        .all(db)
        .await?;

    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].user_id, user.id);
    assert_eq!(memberships[0].role, "owner");

    Ok(())
}
