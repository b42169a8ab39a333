//! Typed access to the admin login session.
//!
//! Keeps the session key in one place so controllers and the auth guard agree on
//! where the admin id lives.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_ADMIN_ID: &str = "auth:admin";

/// Authentication session management.
///
/// Wraps the tower-sessions `Session` and stores only the logged-in admin id.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the admin id after a successful login.
    ///
    /// The session id is cycled first so a pre-login cookie can't be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Admin id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_admin_id(&self, admin_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_ADMIN_ID, admin_id).await?;
        Ok(())
    }

    /// Reads the logged-in admin id, `None` when nobody is logged in.
    pub async fn get_admin_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_ADMIN_ID).await?)
    }

    /// Removes all session data. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
