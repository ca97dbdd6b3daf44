use super::*;

/// Tests that subscribing creates a subscriber membership.
///
/// Expected: Ok with the email preference stored
#[tokio::test]
async fn subscribe_creates_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;

    let subscription = SiteService::new(db)
        .subscribe(user.id, site.id, Some(true))
        .await?;

    assert_eq!(subscription.site_id, site.id);
    assert_eq!(subscription.email, Some(true));

    Ok(())
}

/// Tests that subscribing twice updates the existing membership.
///
/// A subscription is unique per (user, site): the second call must update
/// the config blob instead of inserting a second row.
///
/// Expected: one membership row, email preference replaced
#[tokio::test]
async fn subscribing_twice_updates_config() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;

    let service = SiteService::new(db);
    service.subscribe(user.id, site.id, Some(true)).await?;
    let second = service.subscribe(user.id, site.id, Some(false)).await?;

    assert_eq!(second.email, Some(false));

    let count = entity::prelude::Membership::find()
        .filter(entity::membership::Column::UserId.eq(user.id))
        .filter(entity::membership::Column::SiteId.eq(site.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that subscribing to an unknown site fails.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn subscribe_to_unknown_site_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let err = SiteService::new(db)
        .subscribe(user.id, 999, Some(true))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests the unsubscribe round trip.
///
/// Expected: the subscription is gone afterwards
#[tokio::test]
async fn unsubscribe_removes_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;

    let service = SiteService::new(db);
    service.subscribe(user.id, site.id, None).await?;
    service.unsubscribe(user.id, site.id).await?;

    let subscription = service.get_subscription(user.id, site.id).await?;
    assert!(subscription.is_none());

    Ok(())
}

/// Tests unsubscribing without an existing subscription.
///
/// Expected: Err(SubscriptionNotFound)
#[tokio::test]
async fn unsubscribe_without_subscription_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_site_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;

    let err = SiteService::new(db)
        .unsubscribe(user.id, site.id)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::SiteErr(SiteError::SubscriptionNotFound)
    ));

    Ok(())
}
