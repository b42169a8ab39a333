use crate::server::data::rate_limit::RateLimitRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod delete_expired;
mod find;
mod try_count;
