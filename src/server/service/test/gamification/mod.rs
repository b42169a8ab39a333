use crate::server::{
    data::visitor::VisitorRepository,
    error::AppError,
    model::{
        gamification::{Activity, TaskAction},
        leaderboard::LeaderboardPeriod,
    },
    service::gamification::{
        activity::ActivityService, badge::BadgeService, daily_task::DailyTaskService,
        leaderboard::LeaderboardService, reading::ReadingService, streak::StreakService,
    },
};
use chrono::{Duration, NaiveDate, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{
        badge::create_badge,
        daily_task::create_task,
        helpers::create_post_and_visitor,
        post::create_draft,
        visitor::{create_visitor, create_xp_transaction, VisitorFactory},
    },
};

mod activity;
mod badge;
mod check_in;
mod daily_task;
mod leaderboard;
mod reading;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}
