use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::gamification::ReadingEntry;

pub struct ReadingHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReadingHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        visitor_id: &str,
        post_id: i32,
    ) -> Result<Option<entity::reading_history::Model>, DbErr> {
        entity::prelude::ReadingHistory::find()
            .filter(entity::reading_history::Column::VisitorId.eq(visitor_id))
            .filter(entity::reading_history::Column::PostId.eq(post_id))
            .one(self.db)
            .await
    }

    /// Inserts or updates the reading row of a visitor for a post.
    pub async fn upsert(
        &self,
        visitor_id: &str,
        post_id: i32,
        progress: i32,
        completed: bool,
        now: DateTime<Utc>,
    ) -> Result<entity::reading_history::Model, DbErr> {
        match self.find(visitor_id, post_id).await? {
            Some(existing) => {
                let mut active: entity::reading_history::ActiveModel = existing.into();
                active.progress = ActiveValue::Set(progress);
                active.completed = ActiveValue::Set(completed);
                active.read_at = ActiveValue::Set(now);
                active.update(self.db).await
            }
            None => {
                entity::reading_history::ActiveModel {
                    visitor_id: ActiveValue::Set(visitor_id.to_string()),
                    post_id: ActiveValue::Set(post_id),
                    progress: ActiveValue::Set(progress),
                    completed: ActiveValue::Set(completed),
                    read_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Most recently read posts of a visitor with post slug and title.
    pub async fn get_for_visitor(
        &self,
        visitor_id: &str,
        limit: u64,
    ) -> Result<Vec<ReadingEntry>, DbErr> {
        let rows = entity::prelude::ReadingHistory::find()
            .filter(entity::reading_history::Column::VisitorId.eq(visitor_id))
            .order_by_desc(entity::reading_history::Column::ReadAt)
            .order_by_desc(entity::reading_history::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::Post)
            .all(self.db)
            .await?;

        let entries = rows
            .into_iter()
            .filter_map(|(history, post)| {
                post.map(|post| ReadingEntry {
                    post_id: history.post_id,
                    post_slug: post.slug,
                    post_title: post.title,
                    progress: history.progress,
                    completed: history.completed,
                    read_at: history.read_at,
                })
            })
            .collect();

        Ok(entries)
    }
}
