use crate::server::data::reading_history::ReadingHistoryRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::create_post_and_visitor, post::PostFactory},
};

mod get_for_visitor;
