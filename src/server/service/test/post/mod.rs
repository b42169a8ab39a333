use crate::server::{
    error::AppError,
    model::post::{CreatePostParams, UpdatePostParams},
    service::post::PostService,
};
use test_utils::{
    builder::TestBuilder,
    factory::post::{create_draft, PostFactory},
};

mod create;
mod view_by_slug;

fn params(title: &str) -> CreatePostParams {
    CreatePostParams {
        title: title.to_string(),
        slug: None,
        excerpt: None,
        content: "Nội dung **markdown** của bài viết.".to_string(),
        cover_image: None,
        category: "review".to_string(),
        tags: vec!["phim".to_string(), "Phim".to_string(), "anime".to_string()],
        published: true,
        featured: false,
    }
}
