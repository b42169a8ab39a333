use chrono::{DateTime, Utc};

use crate::{
    model::contact::{ContactDto, ContactMessageDto, PaginatedContactMessagesDto},
    server::util::parse::total_pages,
};

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn from_entity(entity: entity::contact_message::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ContactMessageDto {
        ContactMessageDto {
            id: self.id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedContactMessages {
    pub messages: Vec<ContactMessage>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedContactMessages {
    pub fn into_dto(self) -> PaginatedContactMessagesDto {
        PaginatedContactMessagesDto {
            total_pages: total_pages(self.total, self.per_page),
            messages: self
                .messages
                .into_iter()
                .map(ContactMessage::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateContactParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub ip_hash: String,
}

impl CreateContactParams {
    pub fn from_dto(dto: ContactDto, ip_hash: String) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            subject: dto.subject,
            message: dto.message,
            ip_hash,
        }
    }
}
