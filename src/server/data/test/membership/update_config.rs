use super::*;

/// Tests replacing a membership's config blob.
///
/// Expected: the subscription view reflects the new email preference
#[tokio::test]
async fn replaces_config_blob() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;
    let created = factory::membership::MembershipFactory::new(db, user.id, site.id)
        .config(serde_json::json!({ "email": true }))
        .build()
        .await?;

    let repo = MembershipRepository::new(db);
    let updated = repo
        .update_config(created.id, serde_json::json!({ "email": false }))
        .await?;

    let subscription = Subscription::from_membership(updated);
    assert_eq!(subscription.email, Some(false));

    Ok(())
}
