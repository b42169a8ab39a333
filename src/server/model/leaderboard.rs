//! Leaderboard models. `Leaderboard` is also the JSON payload of the cache table.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::leaderboard::{LeaderboardDto, LeaderboardEntryDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardPeriod {
    Weekly,
    Monthly,
    All,
}

impl LeaderboardPeriod {
    pub const ALL_PERIODS: [LeaderboardPeriod; 3] = [Self::Weekly, Self::Monthly, Self::All];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            "all" | "all_time" => Some(Self::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::All => "all",
        }
    }

    /// Start of the period window; `None` for all time.
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Weekly => Some(now - Duration::days(7)),
            Self::Monthly => Some(now - Duration::days(30)),
            Self::All => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub display_name: String,
    pub level: i32,
    pub level_title: String,
    pub xp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub period: String,
    pub entries: Vec<LeaderboardEntry>,
    pub generated_at: DateTime<Utc>,
}

impl Leaderboard {
    pub fn into_dto(self) -> LeaderboardDto {
        LeaderboardDto {
            period: self.period,
            entries: self
                .entries
                .into_iter()
                .map(|e| LeaderboardEntryDto {
                    rank: e.rank,
                    display_name: e.display_name,
                    level: e.level,
                    level_title: e.level_title,
                    xp: e.xp,
                })
                .collect(),
            generated_at: self.generated_at,
        }
    }
}
