//! Post factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// Defaults to a published, non-featured post in the `review` category.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
    content: String,
    category: String,
    tags: String,
    published: bool,
    featured: bool,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"bai-viet-{id}"`
    /// - title: `"Bài viết {id}"`
    /// - category: `"review"`
    /// - published: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("bai-viet-{}", id),
            title: format!("Bài viết {}", id),
            content: "Nội dung bài viết dùng cho kiểm thử. ".repeat(10),
            category: "review".to_string(),
            tags: "test".to_string(),
            published: true,
            featured: false,
            created_at: Utc::now(),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Sets creation (and publication) time, used to control listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            excerpt: ActiveValue::Set("Tóm tắt bài viết".to_string()),
            content: ActiveValue::Set(self.content),
            cover_image: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            tags: ActiveValue::Set(self.tags),
            published: ActiveValue::Set(self.published),
            featured: ActiveValue::Set(self.featured),
            view_count: ActiveValue::Set(0),
            reading_time: ActiveValue::Set(1),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            published_at: ActiveValue::Set(self.published.then_some(self.created_at)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published post with default values.
pub async fn create_post(db: &DatabaseConnection) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db).build().await
}

/// Creates an unpublished draft post.
pub async fn create_draft(db: &DatabaseConnection) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db).published(false).build().await
}
