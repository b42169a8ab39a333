use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{gamification::leaderboard::LeaderboardService, security::SecurityService},
};

/// Every 10 minutes, at second 0.
const CLEANUP_SCHEDULE: &str = "0 */10 * * * *";
/// Every 5 minutes, matching the leaderboard cache lifetime.
const LEADERBOARD_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the maintenance scheduler.
///
/// Two jobs run for the lifetime of the process:
/// - purging elapsed rate limit windows and expired bans
/// - rebuilding the cached leaderboards so readers rarely hit a cold cache
///
/// # Arguments
/// - `db`: Database connection shared with the jobs
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cleanup_db = db.clone();
    let cleanup = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let db = cleanup_db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired(&db).await {
                tracing::error!("Error purging expired security records: {}", e);
            }
        })
    })?;

    let leaderboard_db = db;
    let leaderboard = Job::new_async(LEADERBOARD_SCHEDULE, move |_uuid, _lock| {
        let db = leaderboard_db.clone();

        Box::pin(async move {
            if let Err(e) = LeaderboardService::new(&db).refresh_all(Utc::now()).await {
                tracing::error!("Error refreshing leaderboards: {}", e);
            }
        })
    })?;

    scheduler.add(cleanup).await?;
    scheduler.add(leaderboard).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(())
}

async fn purge_expired(db: &DatabaseConnection) -> Result<(), AppError> {
    let (windows, bans) = SecurityService::new(db).cleanup_expired(Utc::now()).await?;

    if windows > 0 || bans > 0 {
        tracing::debug!(
            "Purged {} rate limit windows and {} expired bans",
            windows,
            bans
        );
    }

    Ok(())
}
