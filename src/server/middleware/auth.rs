use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::admin::AdminUser,
};

/// Guards back-office endpoints behind the admin session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in admin.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - Session holds an existing admin
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Admin was removed after login
    pub async fn require(&self) -> Result<AdminUser, AppError> {
        let Some(admin_id) = AuthSession::new(self.session).get_admin_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(admin) = AdminUserRepository::new(self.db).find_by_id(admin_id).await? else {
            return Err(AuthError::UserNotInDatabase(admin_id).into());
        };

        Ok(admin)
    }
}
