use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    middleware::client_identity::ClientIdentity,
    model::security::{RateAction, RateLimitDecision},
    service::security::SecurityService,
};

/// Ban and rate limit check run before a public write reaches its service.
pub struct SecurityGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SecurityGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(())` - Caller may proceed
    /// - `Err(AppError::Banned)` - Ip hash has an active ban
    /// - `Err(AppError::RateLimited)` - Window for this action is exhausted
    pub async fn check(
        &self,
        identity: &ClientIdentity,
        action: RateAction,
    ) -> Result<(), AppError> {
        let now = Utc::now();
        let security = SecurityService::new(self.db);

        if security.is_banned(&identity.ip_hash, now).await? {
            tracing::debug!("Rejected banned ip hash {}", identity.ip_hash);
            return Err(AppError::Banned);
        }

        match security
            .check_rate_limit(&identity.ip_hash, action, now)
            .await?
        {
            RateLimitDecision::Allowed { .. } => Ok(()),
            RateLimitDecision::Blocked { retry_after } => {
                Err(AppError::RateLimited { retry_after })
            }
        }
    }
}
