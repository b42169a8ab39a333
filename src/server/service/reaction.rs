//! Post reactions toggled per ip hash and type.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{post::PostRepository, reaction::ReactionRepository},
    error::AppError,
    model::{
        gamification::Activity,
        reaction::{ReactionSummary, ToggleOutcome},
    },
    service::gamification::activity::ActivityService,
};

pub struct ReactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Per-type counts of a post and the types the caller has active.
    pub async fn summary(&self, post_id: i32, ip_hash: &str) -> Result<ReactionSummary, AppError> {
        self.require_published_post(post_id).await?;

        let repo = ReactionRepository::new(self.db);

        Ok(ReactionSummary {
            post_id,
            counts: repo.count_by_type(post_id).await?,
            active: repo.get_types_for_identity(post_id, ip_hash).await?,
        })
    }

    /// Removes the caller's reaction of this type if present, otherwise adds it.
    ///
    /// Adding a reaction credits the reaction activity to the visitor, if given.
    pub async fn toggle(
        &self,
        post_id: i32,
        ip_hash: &str,
        reaction_type: &str,
        visitor_id: Option<&str>,
    ) -> Result<ToggleOutcome, AppError> {
        self.require_published_post(post_id).await?;

        let repo = ReactionRepository::new(self.db);

        let added = match repo.find(post_id, ip_hash, reaction_type).await? {
            Some(existing) => {
                repo.delete(existing.id).await?;
                false
            }
            None => {
                // A concurrent toggle may have stored the same reaction first; only the
                // request that inserted it earns the activity.
                if repo.create(post_id, ip_hash, reaction_type).await? {
                    ActivityService::new(self.db)
                        .record_after(visitor_id, Activity::Reaction)
                        .await;
                }
                true
            }
        };

        Ok(ToggleOutcome {
            reaction_type: reaction_type.to_string(),
            added,
            summary: self.summary(post_id, ip_hash).await?,
        })
    }

    async fn require_published_post(&self, post_id: i32) -> Result<(), AppError> {
        match PostRepository::new(self.db).find_by_id(post_id).await? {
            Some(post) if post.published => Ok(()),
            _ => Err(AppError::NotFound("Không tìm thấy bài viết".to_string())),
        }
    }
}
