//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Setup code service for first-admin setup
//! - Salt used to derive client IP hashes
//! - Comment moderation flag

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{config::Config, service::admin::setup_code::SetupCodeService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` shares its pool, the admin
/// code service and salt sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Service for managing the one-time admin setup code.
    ///
    /// Only holds a code when no admin account existed at startup.
    pub setup_codes: SetupCodeService,

    /// Secret salt mixed into every client IP hash.
    pub ip_hash_salt: Arc<str>,

    /// New comments start unapproved when set.
    pub comments_require_approval: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `setup_codes` - Service for managing admin setup codes
    /// - `config` - Loaded configuration supplying the salt and moderation flag
    pub fn new(
        db: DatabaseConnection,
        setup_codes: SetupCodeService,
        config: &Config,
    ) -> Self {
        Self {
            db,
            setup_codes,
            ip_hash_salt: Arc::from(config.ip_hash_salt.as_str()),
            comments_require_approval: config.comments_require_approval,
        }
    }
}
