use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::security::Ban;

pub struct BannedIpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannedIpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bans an ip hash, replacing reason and expiry of an existing ban.
    pub async fn upsert(
        &self,
        ip_hash: &str,
        reason: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Ban, DbErr> {
        let existing = entity::prelude::BannedIp::find()
            .filter(entity::banned_ip::Column::IpHash.eq(ip_hash))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::banned_ip::ActiveModel = existing.into();
                active.reason = ActiveValue::Set(reason.to_string());
                active.expires_at = ActiveValue::Set(expires_at);
                active.update(self.db).await?
            }
            None => {
                entity::banned_ip::ActiveModel {
                    ip_hash: ActiveValue::Set(ip_hash.to_string()),
                    reason: ActiveValue::Set(reason.to_string()),
                    expires_at: ActiveValue::Set(expires_at),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Ban::from_entity(entity))
    }

    /// Finds a ban on the ip hash that is still in force at `now`.
    pub async fn find_active(
        &self,
        ip_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Ban>, DbErr> {
        let entity = entity::prelude::BannedIp::find()
            .filter(entity::banned_ip::Column::IpHash.eq(ip_hash))
            .filter(Self::in_force(now))
            .one(self.db)
            .await?;

        Ok(entity.map(Ban::from_entity))
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Ban>, u64), DbErr> {
        let paginator = entity::prelude::BannedIp::find()
            .order_by_desc(entity::banned_ip::Column::CreatedAt)
            .order_by_desc(entity::banned_ip::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Ban::from_entity).collect(), total))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BannedIp::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes bans whose expiry has passed. Permanent bans are kept.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::BannedIp::delete_many()
            .filter(entity::banned_ip::Column::ExpiresAt.is_not_null())
            .filter(entity::banned_ip::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_active(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::BannedIp::find()
            .filter(Self::in_force(now))
            .count(self.db)
            .await
    }

    fn in_force(now: DateTime<Utc>) -> Condition {
        Condition::any()
            .add(entity::banned_ip::Column::ExpiresAt.is_null())
            .add(entity::banned_ip::Column::ExpiresAt.gt(now))
    }
}
