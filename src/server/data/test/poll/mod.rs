use crate::server::{data::poll::PollRepository, model::poll::CreatePollParams};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::create_poll_with_options, post::create_post},
};

mod create;
mod get_all;
mod record_vote;
