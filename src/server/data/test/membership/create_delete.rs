use super::*;

/// Tests the create/delete round trip for a subscription membership.
///
/// Expected: the membership exists after create and is gone after delete
#[tokio::test]
async fn creates_and_deletes_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;

    let repo = MembershipRepository::new(db);
    let membership = repo
        .create(CreateMembershipParam {
            user_id: user.id,
            site_id: site.id,
            role: MembershipRole::Subscriber,
            config: Some(serde_json::json!({ "email": true })),
        })
        .await?;

    assert_eq!(membership.user_id, user.id);
    assert_eq!(membership.site_id, site.id);

    repo.delete(membership.id).await?;

    let found = repo
        .find(user.id, site.id, MembershipRole::Subscriber)
        .await?;
    assert!(found.is_none());

    Ok(())
}
