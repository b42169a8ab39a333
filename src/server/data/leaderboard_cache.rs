use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct LeaderboardCacheRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardCacheRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        period: &str,
    ) -> Result<Option<entity::leaderboard_cache::Model>, DbErr> {
        entity::prelude::LeaderboardCache::find()
            .filter(entity::leaderboard_cache::Column::Period.eq(period))
            .one(self.db)
            .await
    }

    /// Stores the serialized leaderboard for a period, replacing any previous payload.
    pub async fn upsert(
        &self,
        period: &str,
        payload: String,
        updated_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        match self.find(period).await? {
            Some(existing) => {
                let mut active: entity::leaderboard_cache::ActiveModel = existing.into();
                active.payload = ActiveValue::Set(payload);
                active.updated_at = ActiveValue::Set(updated_at);
                active.update(self.db).await?;
            }
            None => {
                entity::leaderboard_cache::ActiveModel {
                    period: ActiveValue::Set(period.to_string()),
                    payload: ActiveValue::Set(payload),
                    updated_at: ActiveValue::Set(updated_at),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }
}
