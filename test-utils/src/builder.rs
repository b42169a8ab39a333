use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Post, Comment};
///
/// let test = TestBuilder::new()
///     .with_table(Post)
///     .with_table(Comment)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Composite unique indexes declared with `unique_key`, created after all tables.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, plus any composite unique indexes the entity declares. Tables
    /// should be added in dependency order (tables with foreign keys after their
    /// referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds the post table and everything hanging off a post.
    ///
    /// Tables: Post, Comment, Reaction, Poll, PollOption, PollVote
    pub fn with_content_tables(self) -> Self {
        self.with_table(Post)
            .with_table(Comment)
            .with_table(Reaction)
            .with_table(Poll)
            .with_table(PollOption)
            .with_table(PollVote)
    }

    /// Adds the tables backing rate limiting and IP bans.
    pub fn with_security_tables(self) -> Self {
        self.with_table(RateLimit).with_table(BannedIp)
    }

    /// Adds every table used by visitor gamification.
    ///
    /// Tables: VisitorProfile, XpTransaction, Streak, Badge, UserBadge, DailyTask,
    /// UserDailyTask, ReadingHistory, LeaderboardCache
    ///
    /// ReadingHistory references Post, so combine with `with_content_tables()` first
    /// when reading history rows are inserted.
    pub fn with_gamification_tables(self) -> Self {
        self.with_table(VisitorProfile)
            .with_table(XpTransaction)
            .with_table(Streak)
            .with_table(Badge)
            .with_table(UserBadge)
            .with_table(DailyTask)
            .with_table(UserDailyTask)
            .with_table(ReadingHistory)
            .with_table(LeaderboardCache)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_table(AdminUser)
            .with_content_tables()
            .with_security_tables()
            .with_gamification_tables()
            .with_table(ContactMessage)
            .with_table(NewsletterSubscriber)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables, self.indexes).await?;

        Ok(setup)
    }
}
