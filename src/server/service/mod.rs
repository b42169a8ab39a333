//! Service layer between controllers and repositories.
//!
//! Services hold the business rules: validation beyond shape checks, XP and badge
//! side effects, slug generation, ban and rate limit decisions. They take domain
//! models and return them, leaving DTO conversion to controllers.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod contact;
pub mod gamification;
pub mod newsletter;
pub mod poll;
pub mod post;
pub mod reaction;
pub mod security;
pub mod visitor;

#[cfg(test)]
mod test;
