use crate::server::{error::AppError, service::reaction::ReactionService};
use test_utils::{
    builder::TestBuilder,
    factory::{post::create_post, visitor::create_visitor},
};

mod toggle;
