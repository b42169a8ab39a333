//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating comments on an existing post.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    parent_id: Option<i32>,
    author_name: String,
    content: String,
    ip_hash: String,
    approved: bool,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory for the given post.
    ///
    /// Defaults:
    /// - author_name: `"Độc giả {id}"`
    /// - ip_hash: `"iphash{id}"`
    /// - approved: `true`
    pub fn new(db: &'a DatabaseConnection, post_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            post_id,
            parent_id: None,
            author_name: format!("Độc giả {}", id),
            content: "Bài viết rất hay!".to_string(),
            ip_hash: format!("iphash{}", id),
            approved: true,
        }
    }

    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn ip_hash(mut self, ip_hash: impl Into<String>) -> Self {
        self.ip_hash = ip_hash.into();
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            parent_id: ActiveValue::Set(self.parent_id),
            visitor_id: ActiveValue::Set(None),
            author_name: ActiveValue::Set(self.author_name),
            author_email: ActiveValue::Set(None),
            content: ActiveValue::Set(self.content),
            ip_hash: ActiveValue::Set(self.ip_hash),
            approved: ActiveValue::Set(self.approved),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved comment on the given post.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id).build().await
}
