//! Dashboard counters for the back-office.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        banned_ip::BannedIpRepository, comment::CommentRepository, contact::ContactRepository,
        newsletter::NewsletterRepository, poll::PollRepository, post::PostRepository,
        reaction::ReactionRepository, visitor::VisitorRepository,
    },
    error::AppError,
    model::admin::AdminStats,
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<AdminStats, AppError> {
        let posts = PostRepository::new(self.db);
        let comments = CommentRepository::new(self.db);

        Ok(AdminStats {
            posts_published: posts.count_by_published(true).await?,
            posts_draft: posts.count_by_published(false).await?,
            total_views: posts.total_views().await?,
            comments_total: comments.count(false).await?,
            comments_pending: comments.count(true).await?,
            reactions: ReactionRepository::new(self.db).count_all().await?,
            poll_votes: PollRepository::new(self.db).count_votes().await?,
            subscribers_active: NewsletterRepository::new(self.db).count_active().await?,
            contacts_unread: ContactRepository::new(self.db).count_unread().await?,
            visitors: VisitorRepository::new(self.db).count().await?,
            active_bans: BannedIpRepository::new(self.db)
                .count_active(Utc::now())
                .await?,
        })
    }
}
