//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary and
//! controllers convert them into DTOs with `into_dto`. Parameter structs carry already
//! validated input from controllers into services.

pub mod admin;
pub mod comment;
pub mod contact;
pub mod gamification;
pub mod leaderboard;
pub mod newsletter;
pub mod poll;
pub mod post;
pub mod reaction;
pub mod security;
pub mod visitor;
