//! Fixed-window rate limiting and IP bans keyed by ip hash.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{banned_ip::BannedIpRepository, rate_limit::RateLimitRepository},
    error::AppError,
    model::security::{Ban, CreateBanParams, PaginatedBans, RateAction, RateLimitDecision},
};

pub struct SecurityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SecurityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts one request against the fixed window of `(identifier, action)`.
    ///
    /// A missing or elapsed window starts over. The count only moves through a
    /// conditional update, so concurrent requests can't push it past the limit, and
    /// blocked requests don't increase it.
    ///
    /// # Returns
    /// - `Ok(RateLimitDecision::Allowed)` - Request allowed with remaining quota
    /// - `Ok(RateLimitDecision::Blocked)` - Limit reached, with seconds until reset
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn check_rate_limit(
        &self,
        identifier: &str,
        action: RateAction,
        now: DateTime<Utc>,
    ) -> Result<RateLimitDecision, AppError> {
        let policy = action.policy();
        let repo = RateLimitRepository::new(self.db);
        let reset_at = now + policy.window;

        repo.open_window(identifier, action.as_str(), reset_at)
            .await?;
        repo.restart_elapsed(identifier, action.as_str(), now, reset_at)
            .await?;

        let counted = repo
            .try_count(identifier, action.as_str(), policy.limit, now)
            .await?;

        let Some(row) = repo.find(identifier, action.as_str()).await? else {
            return Err(DbErr::RecordNotFound("rate_limit".to_string()).into());
        };

        if counted {
            return Ok(RateLimitDecision::Allowed {
                remaining: (policy.limit - row.count).max(0),
            });
        }

        let retry_after = (row.reset_at - now).num_seconds().max(1);
        tracing::debug!(
            "Rate limit hit for {} on {}, retry after {}s",
            identifier,
            action.as_str(),
            retry_after
        );

        Ok(RateLimitDecision::Blocked { retry_after })
    }

    pub async fn is_banned(&self, ip_hash: &str, now: DateTime<Utc>) -> Result<bool, AppError> {
        let ban = BannedIpRepository::new(self.db)
            .find_active(ip_hash, now)
            .await?;

        Ok(ban.is_some())
    }

    /// Bans an ip hash, replacing any existing ban on it.
    pub async fn ban(&self, params: CreateBanParams, now: DateTime<Utc>) -> Result<Ban, AppError> {
        let expires_at = params.duration.map(|duration| now + duration);

        let ban = BannedIpRepository::new(self.db)
            .upsert(&params.ip_hash, &params.reason, expires_at)
            .await?;

        tracing::info!(
            "Banned ip hash {} until {}",
            ban.ip_hash,
            ban.expires_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "forever".to_string())
        );

        Ok(ban)
    }

    pub async fn unban(&self, id: i32) -> Result<(), AppError> {
        if !BannedIpRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Không tìm thấy lệnh chặn".to_string()));
        }

        Ok(())
    }

    pub async fn list_bans(&self, page: u64, per_page: u64) -> Result<PaginatedBans, AppError> {
        let (bans, total) = BannedIpRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedBans {
            bans,
            total,
            page,
            per_page,
        })
    }

    /// Purges elapsed limiter windows and expired bans.
    ///
    /// # Returns
    /// - `Ok((windows, bans))` - Number of rows deleted from each table
    pub async fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<(u64, u64), AppError> {
        let windows = RateLimitRepository::new(self.db).delete_expired(now).await?;
        let bans = BannedIpRepository::new(self.db).delete_expired(now).await?;

        Ok((windows, bans))
    }
}
