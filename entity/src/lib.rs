//! SeaORM entity definitions for every table of the platform.

pub mod prelude;

pub mod admin_user;
pub mod badge;
pub mod banned_ip;
pub mod comment;
pub mod contact_message;
pub mod daily_task;
pub mod leaderboard_cache;
pub mod newsletter_subscriber;
pub mod poll;
pub mod poll_option;
pub mod poll_vote;
pub mod post;
pub mod rate_limit;
pub mod reaction;
pub mod reading_history;
pub mod streak;
pub mod user_badge;
pub mod user_daily_task;
pub mod visitor_profile;
pub mod xp_transaction;
