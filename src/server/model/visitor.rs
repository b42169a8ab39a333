//! Visitor profile models.

use chrono::{DateTime, Utc};

use crate::{
    model::visitor::{CreateVisitorDto, VisitorProfileDto},
    server::model::gamification::{LevelProgress, Streak, VisitorStats},
};

#[derive(Debug, Clone)]
pub struct VisitorProfile {
    pub visitor_id: String,
    pub display_name: String,
    pub xp: i32,
    pub level: i32,
    pub posts_read: i32,
    pub comments_count: i32,
    pub reactions_count: i32,
    pub votes_count: i32,
    pub created_at: DateTime<Utc>,
}

impl VisitorProfile {
    pub fn from_entity(entity: entity::visitor_profile::Model) -> Self {
        Self {
            visitor_id: entity.visitor_id,
            display_name: entity.display_name,
            xp: entity.xp,
            level: entity.level,
            posts_read: entity.posts_read,
            comments_count: entity.comments_count,
            reactions_count: entity.reactions_count,
            votes_count: entity.votes_count,
            created_at: entity.created_at,
        }
    }

    /// Counters used for badge evaluation.
    pub fn stats(&self, streak: i32) -> VisitorStats {
        VisitorStats {
            posts_read: self.posts_read,
            comments: self.comments_count,
            reactions: self.reactions_count,
            votes: self.votes_count,
            streak,
            level: self.level,
            xp: self.xp,
        }
    }
}

/// Profile plus derived level, streak and badge count for the profile endpoint.
#[derive(Debug, Clone)]
pub struct VisitorOverview {
    pub profile: VisitorProfile,
    pub level: LevelProgress,
    pub streak: Streak,
    pub badges_count: u64,
}

impl VisitorOverview {
    pub fn into_dto(self) -> VisitorProfileDto {
        VisitorProfileDto {
            visitor_id: self.profile.visitor_id,
            display_name: self.profile.display_name,
            level: self.level.into_dto(),
            posts_read: self.profile.posts_read,
            comments_count: self.profile.comments_count,
            reactions_count: self.profile.reactions_count,
            votes_count: self.profile.votes_count,
            streak: self.streak.into_dto(),
            badges_count: self.badges_count,
            created_at: self.profile.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVisitorParams {
    pub visitor_id: String,
    pub display_name: Option<String>,
}

impl CreateVisitorParams {
    pub fn from_dto(dto: CreateVisitorDto) -> Self {
        Self {
            visitor_id: dto.visitor_id.trim().to_string(),
            display_name: dto.display_name,
        }
    }
}

/// Counter column bumped by an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitorCounter {
    PostsRead,
    Comments,
    Reactions,
    Votes,
}
