use crate::server::data::newsletter::NewsletterRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod set_active;
