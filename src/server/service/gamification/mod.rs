//! Visitor gamification: XP, levels, streaks, badges, daily tasks, reading history
//! and the leaderboard.
//!
//! Every service here keys visitors by their client-generated `visitor_id`. The
//! `activity` module ties the pieces together: one visitor action bumps a counter,
//! grants XP, advances daily tasks and re-evaluates badges.

pub mod activity;
pub mod badge;
pub mod daily_task;
pub mod leaderboard;
pub mod level;
pub mod reading;
pub mod streak;
pub mod xp;
