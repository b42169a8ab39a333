use chrono::{DateTime, Utc};

use crate::{
    model::newsletter::{PaginatedSubscribersDto, SubscriberDto},
    server::util::parse::total_pages,
};

#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: i32,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

impl Subscriber {
    pub fn from_entity(entity: entity::newsletter_subscriber::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            active: entity.active,
            created_at: entity.created_at,
            unsubscribed_at: entity.unsubscribed_at,
        }
    }

    pub fn into_dto(self) -> SubscriberDto {
        SubscriberDto {
            id: self.id,
            email: self.email,
            active: self.active,
            created_at: self.created_at,
            unsubscribed_at: self.unsubscribed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedSubscribers {
    pub subscribers: Vec<Subscriber>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedSubscribers {
    pub fn into_dto(self) -> PaginatedSubscribersDto {
        PaginatedSubscribersDto {
            total_pages: total_pages(self.total, self.per_page),
            subscribers: self
                .subscribers
                .into_iter()
                .map(Subscriber::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
