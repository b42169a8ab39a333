use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::newsletter::Subscriber;

pub struct NewsletterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsletterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DbErr> {
        let entity = entity::prelude::NewsletterSubscriber::find()
            .filter(entity::newsletter_subscriber::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Subscriber::from_entity))
    }

    pub async fn create(&self, email: &str) -> Result<Subscriber, DbErr> {
        let entity = entity::newsletter_subscriber::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            unsubscribed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subscriber::from_entity(entity))
    }

    /// Activates or deactivates a subscription.
    ///
    /// Deactivating stamps `unsubscribed_at` with `now`; reactivating clears it.
    pub async fn set_active(
        &self,
        id: i32,
        active: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<Subscriber>, DbErr> {
        let Some(existing) = entity::prelude::NewsletterSubscriber::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model: entity::newsletter_subscriber::ActiveModel = existing.into();
        model.active = ActiveValue::Set(active);
        model.unsubscribed_at = ActiveValue::Set(if active { None } else { Some(now) });
        let entity = model.update(self.db).await?;

        Ok(Some(Subscriber::from_entity(entity)))
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Subscriber>, u64), DbErr> {
        let paginator = entity::prelude::NewsletterSubscriber::find()
            .order_by_desc(entity::newsletter_subscriber::Column::CreatedAt)
            .order_by_desc(entity::newsletter_subscriber::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Subscriber::from_entity).collect(),
            total,
        ))
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::NewsletterSubscriber::find()
            .filter(entity::newsletter_subscriber::Column::Active.eq(true))
            .count(self.db)
            .await
    }
}
