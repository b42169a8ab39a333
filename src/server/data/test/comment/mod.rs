use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{comment::CommentFactory, post::create_post},
};

mod create;
mod get_approved_by_post;
mod get_paginated;
mod set_approved;
