use super::*;

/// Tests that find matches on the exact (user, site, role) triple.
///
/// Expected: Some for the stored role, None for the other role
#[tokio::test]
async fn finds_membership_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;
    factory::membership::create_membership(db, user.id, site.id).await?;

    let repo = MembershipRepository::new(db);

    let subscriber = repo
        .find(user.id, site.id, MembershipRole::Subscriber)
        .await?;
    assert!(subscriber.is_some());
    assert_eq!(subscriber.unwrap().role, MembershipRole::Subscriber);

    let owner = repo.find(user.id, site.id, MembershipRole::Owner).await?;
    assert!(owner.is_none());

    Ok(())
}
