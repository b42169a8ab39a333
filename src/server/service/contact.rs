//! Contact form messages.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::ContactRepository,
    error::AppError,
    model::contact::{ContactMessage, CreateContactParams, PaginatedContactMessages},
    util::sanitize::sanitize_required,
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a sanitized contact message.
    ///
    /// # Returns
    /// - `Ok(ContactMessage)` - Stored message
    /// - `Err(AppError::BadRequest)` - Name, subject or message empty after cleaning
    pub async fn submit(&self, params: CreateContactParams) -> Result<ContactMessage, AppError> {
        let message = ContactRepository::new(self.db)
            .create(CreateContactParams {
                name: sanitize_required(&params.name, "Tên không được để trống")?,
                email: params.email.trim().to_lowercase(),
                subject: sanitize_required(&params.subject, "Tiêu đề không được để trống")?,
                message: sanitize_required(&params.message, "Nội dung không được để trống")?,
                ip_hash: params.ip_hash,
            })
            .await?;

        tracing::info!("New contact message {} from {}", message.id, message.email);

        Ok(message)
    }

    pub async fn list(
        &self,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedContactMessages, AppError> {
        let (messages, total) = ContactRepository::new(self.db)
            .get_paginated(unread_only, page, per_page)
            .await?;

        Ok(PaginatedContactMessages {
            messages,
            total,
            page,
            per_page,
        })
    }

    pub async fn set_read(&self, id: i32, is_read: bool) -> Result<(), AppError> {
        if !ContactRepository::new(self.db).set_read(id, is_read).await? {
            return Err(AppError::NotFound("Không tìm thấy tin nhắn".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ContactRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Không tìm thấy tin nhắn".to_string()));
        }

        Ok(())
    }
}
