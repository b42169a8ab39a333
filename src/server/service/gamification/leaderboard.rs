//! Leaderboard ranking with a short-lived database cache.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{leaderboard_cache::LeaderboardCacheRepository, visitor::VisitorRepository},
    error::{internal::InternalError, AppError},
    model::{
        leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardPeriod},
        visitor::VisitorProfile,
    },
    service::gamification::level::title_for_level,
};

/// Number of ranked visitors.
pub const LEADERBOARD_SIZE: usize = 20;

/// How long a cached leaderboard is served before being rebuilt.
pub fn cache_ttl() -> Duration {
    Duration::minutes(5)
}

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Leaderboard for a period, served from cache while it is fresh.
    ///
    /// An unreadable cache payload is logged and rebuilt.
    pub async fn get(
        &self,
        period: LeaderboardPeriod,
        now: DateTime<Utc>,
    ) -> Result<Leaderboard, AppError> {
        let cache = LeaderboardCacheRepository::new(self.db);

        if let Some(cached) = cache.find(period.as_str()).await? {
            if cached.updated_at + cache_ttl() > now {
                match serde_json::from_str::<Leaderboard>(&cached.payload) {
                    Ok(leaderboard) => return Ok(leaderboard),
                    Err(e) => tracing::warn!(
                        "Discarding {} leaderboard cache: {}",
                        period.as_str(),
                        e
                    ),
                }
            }
        }

        self.refresh(period, now).await
    }

    /// Rebuilds the leaderboard of a period and stores it in the cache.
    pub async fn refresh(
        &self,
        period: LeaderboardPeriod,
        now: DateTime<Utc>,
    ) -> Result<Leaderboard, AppError> {
        let leaderboard = self.build(period, now).await?;

        let payload = serde_json::to_string(&leaderboard).map_err(InternalError::from)?;
        LeaderboardCacheRepository::new(self.db)
            .upsert(period.as_str(), payload, now)
            .await?;

        Ok(leaderboard)
    }

    async fn build(
        &self,
        period: LeaderboardPeriod,
        now: DateTime<Utc>,
    ) -> Result<Leaderboard, AppError> {
        let visitor_repo = VisitorRepository::new(self.db);

        let ranked: Vec<(VisitorProfile, i64)> = match period.since(now) {
            None => visitor_repo
                .get_top_by_xp(LEADERBOARD_SIZE as u64)
                .await?
                .into_iter()
                .map(|profile| {
                    let xp = profile.xp as i64;
                    (profile, xp)
                })
                .collect(),
            Some(since) => {
                let mut totals: HashMap<String, i64> = HashMap::new();
                for (visitor_id, amount) in visitor_repo.get_xp_since(since).await? {
                    *totals.entry(visitor_id).or_default() += amount as i64;
                }

                let mut totals: Vec<(String, i64)> =
                    totals.into_iter().filter(|(_, xp)| *xp > 0).collect();
                totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                totals.truncate(LEADERBOARD_SIZE);

                let ids: Vec<String> = totals.iter().map(|(id, _)| id.clone()).collect();
                let mut profiles: HashMap<String, VisitorProfile> = visitor_repo
                    .get_many(&ids)
                    .await?
                    .into_iter()
                    .map(|profile| (profile.visitor_id.clone(), profile))
                    .collect();

                totals
                    .into_iter()
                    .filter_map(|(id, xp)| profiles.remove(&id).map(|profile| (profile, xp)))
                    .collect()
            }
        };

        let entries = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (profile, xp))| LeaderboardEntry {
                rank: i as u32 + 1,
                display_name: profile.display_name,
                level: profile.level,
                level_title: title_for_level(profile.level).to_string(),
                xp,
            })
            .collect();

        Ok(Leaderboard {
            period: period.as_str().to_string(),
            entries,
            generated_at: now,
        })
    }

    /// Rebuilds every period. Used by the scheduler to keep the cache warm.
    pub async fn refresh_all(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        for period in LeaderboardPeriod::ALL_PERIODS {
            self.refresh(period, now).await?;
        }

        Ok(())
    }
}
