//! Visitor profile factory for gamification tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating visitor profiles with customizable XP and counters.
pub struct VisitorFactory<'a> {
    db: &'a DatabaseConnection,
    visitor_id: String,
    display_name: String,
    xp: i32,
    level: i32,
    posts_read: i32,
    comments_count: i32,
}

impl<'a> VisitorFactory<'a> {
    /// Creates a new VisitorFactory with default values.
    ///
    /// Defaults:
    /// - visitor_id: `"visitor-{id:08}"`
    /// - display_name: `"Khách {id}"`
    /// - xp: `0`, level: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            visitor_id: format!("visitor-{:08}", id),
            display_name: format!("Khách {}", id),
            xp: 0,
            level: 1,
            posts_read: 0,
            comments_count: 0,
        }
    }

    pub fn visitor_id(mut self, visitor_id: impl Into<String>) -> Self {
        self.visitor_id = visitor_id.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets XP without adjusting level; set `level` too when it matters.
    pub fn xp(mut self, xp: i32) -> Self {
        self.xp = xp;
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn posts_read(mut self, posts_read: i32) -> Self {
        self.posts_read = posts_read;
        self
    }

    pub fn comments_count(mut self, comments_count: i32) -> Self {
        self.comments_count = comments_count;
        self
    }

    /// Builds and inserts the visitor profile into the database.
    pub async fn build(self) -> Result<entity::visitor_profile::Model, DbErr> {
        let now = Utc::now();
        entity::visitor_profile::ActiveModel {
            visitor_id: ActiveValue::Set(self.visitor_id),
            display_name: ActiveValue::Set(self.display_name),
            xp: ActiveValue::Set(self.xp),
            level: ActiveValue::Set(self.level),
            posts_read: ActiveValue::Set(self.posts_read),
            comments_count: ActiveValue::Set(self.comments_count),
            reactions_count: ActiveValue::Set(0),
            votes_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visitor profile with default values.
pub async fn create_visitor(
    db: &DatabaseConnection,
) -> Result<entity::visitor_profile::Model, DbErr> {
    VisitorFactory::new(db).build().await
}

/// Inserts an XP transaction row at a specific time.
///
/// Only writes the ledger row; the profile XP total is left untouched.
pub async fn create_xp_transaction(
    db: &DatabaseConnection,
    visitor_id: &str,
    amount: i32,
    created_at: chrono::DateTime<Utc>,
) -> Result<entity::xp_transaction::Model, DbErr> {
    entity::xp_transaction::ActiveModel {
        visitor_id: ActiveValue::Set(visitor_id.to_string()),
        amount: ActiveValue::Set(amount),
        reason: ActiveValue::Set("test".to_string()),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
