//! Back-office services: first-admin setup code and dashboard stats.

pub mod setup_code;
pub mod stats;
