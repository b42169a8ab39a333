use crate::server::data::daily_task::DailyTaskRepository;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{daily_task::create_task, visitor::create_visitor},
};

mod get_active_by_action;
mod mark_claimed;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}
