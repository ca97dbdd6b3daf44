use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Session-backed authentication guard.
///
/// Controllers call `require()` to resolve the viewer before doing any work.
/// Site-level authorization (ownership) is checked by the services on top of
/// the viewer returned here.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the authenticated viewer from the session.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No user id in the session
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Stale session pointing
    ///   at a removed user
    pub async fn require(&self) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
