//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{membership::MembershipFactory, site::SiteFactory, user::UserFactory};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Monotonically increasing across all factories, so generated subdomains,
/// addresses, and slugs never collide within a test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a site, and the owner membership linking them.
///
/// # Returns
/// - `Ok((user, site, membership))` - The created rows
/// - `Err(DbErr)` - Database error during any insert
pub async fn create_site_with_owner(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::site::Model,
        entity::membership::Model,
    ),
    DbErr,
> {
    let user = UserFactory::new(db).build().await?;
    let site = SiteFactory::new(db).build().await?;
    let membership = MembershipFactory::new(db, user.id, site.id)
        .role("owner")
        .build()
        .await?;

    Ok((user, site, membership))
}
