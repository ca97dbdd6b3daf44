use super::*;

/// Tests the guard with no user id in the session.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn errors_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let err = AuthGuard::new(db, session).require().await.unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::UserNotInSession)
    ));

    Ok(())
}

/// Tests the guard with a session pointing at a removed user.
///
/// Expected: Err(UserNotInDatabase) carrying the stale id
#[tokio::test]
async fn errors_for_stale_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session.insert(SESSION_AUTH_USER_ID, 999).await?;

    let err = AuthGuard::new(db, session).require().await.unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::UserNotInDatabase(999))
    ));

    Ok(())
}

/// Tests the guard with a valid session user.
///
/// Expected: Ok with the stored user resolved
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    let resolved = AuthGuard::new(db, session).require().await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.address, user.address);

    Ok(())
}
