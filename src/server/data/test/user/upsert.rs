use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository creates a new user record with the
/// specified address and name.
///
/// Expected: Ok with the user created
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            address: "0xabcd000000000000000000000000000000001234".to_string(),
            name: "TestUser".to_string(),
        })
        .await?;

    assert_eq!(user.address, "0xabcd000000000000000000000000000000001234");
    assert_eq!(user.name, "TestUser");

    Ok(())
}

/// Tests upserting an existing address.
///
/// Verifies that upserting with an address that already exists updates the
/// display name instead of creating a second row, and keeps the same id.
///
/// Expected: Ok with the name refreshed and the id unchanged
#[tokio::test]
async fn refreshes_name_of_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let first = repo
        .upsert(UpsertUserParam {
            address: "0xabcd000000000000000000000000000000001234".to_string(),
            name: "OriginalName".to_string(),
        })
        .await?;

    let second = repo
        .upsert(UpsertUserParam {
            address: "0xabcd000000000000000000000000000000001234".to_string(),
            name: "UpdatedName".to_string(),
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "UpdatedName");

    Ok(())
}
