//! Request guards and extractors shared by controllers.
//!
//! - `auth` - admin session guard
//! - `client_identity` - salted ip hash of the caller
//! - `extract` - JSON, query and path extractors rejecting with `AppError`
//! - `security` - ban and rate limit checks
//! - `session` - typed wrapper over the session store

pub mod auth;
pub mod client_identity;
pub mod extract;
pub mod security;
pub mod session;

#[cfg(test)]
mod test;
