use crate::server::{
    error::AppError, model::visitor::CreateVisitorParams, service::visitor::VisitorService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::create_post_and_visitor, visitor::VisitorFactory},
};

mod get_or_create;
