pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_admin_user_table;
mod m20260105_000002_create_post_table;
mod m20260105_000003_create_comment_table;
mod m20260105_000004_create_reaction_table;
mod m20260105_000005_create_poll_table;
mod m20260105_000006_create_poll_option_table;
mod m20260105_000007_create_poll_vote_table;
mod m20260105_000008_create_rate_limit_table;
mod m20260105_000009_create_banned_ip_table;
mod m20260106_000010_create_visitor_profile_table;
mod m20260106_000011_create_xp_transaction_table;
mod m20260106_000012_create_streak_table;
mod m20260106_000013_create_badge_table;
mod m20260106_000014_create_user_badge_table;
mod m20260106_000015_create_daily_task_table;
mod m20260106_000016_create_user_daily_task_table;
mod m20260106_000017_create_reading_history_table;
mod m20260107_000018_create_contact_message_table;
mod m20260107_000019_create_newsletter_subscriber_table;
mod m20260107_000020_create_leaderboard_cache_table;
mod m20260107_000021_seed_gamification;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_admin_user_table::Migration),
            Box::new(m20260105_000002_create_post_table::Migration),
            Box::new(m20260105_000003_create_comment_table::Migration),
            Box::new(m20260105_000004_create_reaction_table::Migration),
            Box::new(m20260105_000005_create_poll_table::Migration),
            Box::new(m20260105_000006_create_poll_option_table::Migration),
            Box::new(m20260105_000007_create_poll_vote_table::Migration),
            Box::new(m20260105_000008_create_rate_limit_table::Migration),
            Box::new(m20260105_000009_create_banned_ip_table::Migration),
            Box::new(m20260106_000010_create_visitor_profile_table::Migration),
            Box::new(m20260106_000011_create_xp_transaction_table::Migration),
            Box::new(m20260106_000012_create_streak_table::Migration),
            Box::new(m20260106_000013_create_badge_table::Migration),
            Box::new(m20260106_000014_create_user_badge_table::Migration),
            Box::new(m20260106_000015_create_daily_task_table::Migration),
            Box::new(m20260106_000016_create_user_daily_task_table::Migration),
            Box::new(m20260106_000017_create_reading_history_table::Migration),
            Box::new(m20260107_000018_create_contact_message_table::Migration),
            Box::new(m20260107_000019_create_newsletter_subscriber_table::Migration),
            Box::new(m20260107_000020_create_leaderboard_cache_table::Migration),
            Box::new(m20260107_000021_seed_gamification::Migration),
        ]
    }
}
