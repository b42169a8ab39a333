//! Admin account and dashboard models.

use chrono::{DateTime, Utc};

use crate::model::{admin::StatsDto, auth::AdminDto};

/// Back-office account. The password hash never leaves the data layer.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn from_entity(entity: entity::admin_user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminStats {
    pub posts_published: u64,
    pub posts_draft: u64,
    pub total_views: i64,
    pub comments_total: u64,
    pub comments_pending: u64,
    pub reactions: u64,
    pub poll_votes: u64,
    pub subscribers_active: u64,
    pub contacts_unread: u64,
    pub visitors: u64,
    pub active_bans: u64,
}

impl AdminStats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            posts_published: self.posts_published,
            posts_draft: self.posts_draft,
            total_views: self.total_views,
            comments_total: self.comments_total,
            comments_pending: self.comments_pending,
            reactions: self.reactions,
            poll_votes: self.poll_votes,
            subscribers_active: self.subscribers_active,
            contacts_unread: self.contacts_unread,
            visitors: self.visitors,
            active_bans: self.active_bans,
        }
    }
}
