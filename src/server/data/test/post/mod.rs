use crate::server::{
    data::post::PostRepository,
    model::post::{PostFilter, PostRecord},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::post::{create_draft, create_post, PostFactory},
};

mod create;
mod get_category_counts;
mod get_published_paginated;
mod get_related;
mod slug_exists;

fn record(slug: &str, published: bool) -> PostRecord {
    PostRecord {
        slug: slug.to_string(),
        title: "Đánh giá tai nghe".to_string(),
        excerpt: "Tóm tắt".to_string(),
        content: "Nội dung".to_string(),
        cover_image: None,
        category: "cong-nghe".to_string(),
        tags: "am-thanh,tai-nghe".to_string(),
        published,
        featured: false,
        reading_time: 3,
        published_at: published.then(chrono::Utc::now),
    }
}
