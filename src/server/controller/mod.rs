//! HTTP handlers.
//!
//! Handlers validate the payload, run the guards the route needs (admin session,
//! ban and rate limit), call one service and convert the result to a DTO.

use serde::Deserialize;
use utoipa::IntoParams;

pub mod admin;
pub mod auth;
pub mod comment;
pub mod contact;
pub mod gamification;
pub mod leaderboard;
pub mod newsletter;
pub mod poll;
pub mod post;
pub mod reaction;
pub mod visitor;

const MAX_ENTRIES: u64 = 50;

/// Zero-based page and page size shared by every paginated endpoint.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    /// Page size clamped to `1..=50`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

fn default_entries() -> u64 {
    10
}
