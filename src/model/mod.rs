//! Request and response DTOs shared by the HTTP API.
//!
//! Input DTOs derive `Validate`; controllers call `validate()` before anything else
//! touches the payload. Output DTOs derive `ToSchema` for the OpenAPI document.

pub mod admin;
pub mod api;
pub mod auth;
pub mod comment;
pub mod contact;
pub mod gamification;
pub mod leaderboard;
pub mod newsletter;
pub mod poll;
pub mod post;
pub mod reaction;
pub mod validation;
pub mod visitor;
