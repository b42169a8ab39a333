use crate::server::{
    data::visitor::VisitorRepository, error::AppError, model::comment::CreateCommentParams,
    service::comment::CommentService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{
        comment::create_comment,
        post::{create_draft, create_post},
        visitor::create_visitor,
    },
};

mod create;

fn params(post_id: i32) -> CreateCommentParams {
    CreateCommentParams {
        post_id,
        parent_id: None,
        visitor_id: None,
        author_name: "Lan".to_string(),
        author_email: None,
        content: "Hay quá!".to_string(),
        ip_hash: "iphash-lan".to_string(),
    }
}
