use crate::server::{
    error::AppError,
    model::{contact::CreateContactParams, security::CreateBanParams},
    service::{
        admin::stats::StatsService, contact::ContactService, newsletter::NewsletterService,
        poll::PollService, post::PostService, reaction::ReactionService,
        security::SecurityService,
    },
};
use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{
        comment::CommentFactory,
        helpers::create_poll_with_options,
        post::{create_draft, PostFactory},
        visitor::create_visitor,
    },
};

mod stats;
