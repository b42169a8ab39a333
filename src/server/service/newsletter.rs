//! Newsletter subscriptions.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::newsletter::NewsletterRepository,
    error::AppError,
    model::newsletter::{PaginatedSubscribers, Subscriber},
};

pub struct NewsletterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsletterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes an email. Subscribing twice is a no-op and an unsubscribed email
    /// is reactivated.
    pub async fn subscribe(&self, email: &str) -> Result<Subscriber, AppError> {
        let email = email.trim().to_lowercase();
        let repo = NewsletterRepository::new(self.db);

        let subscriber = match repo.find_by_email(&email).await? {
            Some(existing) if existing.active => existing,
            Some(existing) => repo
                .set_active(existing.id, true, Utc::now())
                .await?
                .unwrap_or(existing),
            None => repo.create(&email).await?,
        };

        Ok(subscriber)
    }

    /// Unsubscribes an email.
    ///
    /// # Returns
    /// - `Ok(Subscriber)` - Subscription now inactive
    /// - `Err(AppError::NotFound)` - Email never subscribed
    pub async fn unsubscribe(&self, email: &str) -> Result<Subscriber, AppError> {
        let email = email.trim().to_lowercase();
        let repo = NewsletterRepository::new(self.db);

        let Some(existing) = repo.find_by_email(&email).await? else {
            return Err(AppError::NotFound("Email chưa đăng ký nhận tin".to_string()));
        };

        if !existing.active {
            return Ok(existing);
        }

        repo.set_active(existing.id, false, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Email chưa đăng ký nhận tin".to_string()))
    }

    pub async fn list(&self, page: u64, per_page: u64) -> Result<PaginatedSubscribers, AppError> {
        let (subscribers, total) = NewsletterRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedSubscribers {
            subscribers,
            total,
            page,
            per_page,
        })
    }
}
