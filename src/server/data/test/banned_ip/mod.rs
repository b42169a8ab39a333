use crate::server::data::banned_ip::BannedIpRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod delete_expired;
mod upsert;
