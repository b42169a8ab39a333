//! Rate limiting and ban domain models.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::admin::{BanDto, CreateBanDto, PaginatedBansDto},
    server::util::parse::total_pages,
};

/// Actions that are rate limited per client identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateAction {
    Comment,
    Reaction,
    PollVote,
    Contact,
    Newsletter,
    Login,
    VisitorActivity,
}

/// Maximum requests allowed within one fixed window.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitPolicy {
    pub limit: i32,
    pub window: Duration,
}

impl RateAction {
    /// Key stored in the `action` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Reaction => "reaction",
            Self::PollVote => "poll_vote",
            Self::Contact => "contact",
            Self::Newsletter => "newsletter",
            Self::Login => "login",
            Self::VisitorActivity => "visitor_activity",
        }
    }

    pub fn policy(&self) -> RateLimitPolicy {
        let (limit, window) = match self {
            Self::Comment => (5, Duration::minutes(10)),
            Self::Reaction => (30, Duration::minutes(1)),
            Self::PollVote => (10, Duration::minutes(1)),
            Self::Contact => (3, Duration::hours(1)),
            Self::Newsletter => (5, Duration::hours(1)),
            Self::Login => (5, Duration::minutes(15)),
            Self::VisitorActivity => (60, Duration::minutes(1)),
        };

        RateLimitPolicy { limit, window }
    }
}

/// Result of counting one request against a limiter window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: i32 },
    Blocked { retry_after: i64 },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Ban {
    pub id: i32,
    pub ip_hash: String,
    pub reason: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Ban {
    pub fn from_entity(entity: entity::banned_ip::Model) -> Self {
        Self {
            id: entity.id,
            ip_hash: entity.ip_hash,
            reason: entity.reason,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BanDto {
        BanDto {
            id: self.id,
            ip_hash: self.ip_hash,
            reason: self.reason,
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedBans {
    pub bans: Vec<Ban>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedBans {
    pub fn into_dto(self) -> PaginatedBansDto {
        PaginatedBansDto {
            total_pages: total_pages(self.total, self.per_page),
            bans: self.bans.into_iter().map(Ban::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBanParams {
    pub ip_hash: String,
    pub reason: String,
    /// `None` bans permanently.
    pub duration: Option<Duration>,
}

impl CreateBanParams {
    pub fn from_dto(dto: CreateBanDto) -> Self {
        Self {
            ip_hash: dto.ip_hash.trim().to_string(),
            reason: dto.reason.trim().to_string(),
            duration: dto.duration_hours.map(Duration::hours),
        }
    }
}
