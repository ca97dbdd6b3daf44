use super::*;

/// Tests finding an existing user by address.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        address: "0xabcd000000000000000000000000000000001234".to_string(),
        name: "TestUser".to_string(),
    })
    .await?;

    let user = repo
        .find_by_address("0xabcd000000000000000000000000000000001234")
        .await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().name, "TestUser");

    Ok(())
}

/// Tests querying for an unknown address.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .find_by_address("0x0000000000000000000000000000000000000000")
        .await?;

    assert!(user.is_none());

    Ok(())
}
