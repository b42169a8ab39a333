//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod admin_user;
pub mod banned_ip;
pub mod comment;
pub mod contact;
pub mod daily_task;
pub mod gamification;
pub mod leaderboard_cache;
pub mod newsletter;
pub mod poll;
pub mod post;
pub mod rate_limit;
pub mod reaction;
pub mod reading_history;
pub mod visitor;

#[cfg(test)]
mod test;
