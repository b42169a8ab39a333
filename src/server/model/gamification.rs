//! Gamification domain models: levels, streaks, badges, daily tasks and activities.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    gamification::{
        BadgeDto, ClaimTaskResultDto, CreateBadgeDto, CreateDailyTaskDto, DailyTaskDto,
        ReadResultDto, ReadingHistoryDto, TaskProgressDto, UpdateBadgeDto, UpdateDailyTaskDto,
        VisitorBadgeDto,
    },
    visitor::{CheckInResultDto, LevelProgressDto, StreakDto},
};

/// Where a visitor sits on the level curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: i32,
    pub title: &'static str,
    pub xp: i32,
    pub xp_into_level: i32,
    pub xp_to_next_level: i32,
    pub percent: u32,
    pub next_title: Option<&'static str>,
}

impl LevelProgress {
    pub fn into_dto(self) -> LevelProgressDto {
        LevelProgressDto {
            level: self.level,
            title: self.title.to_string(),
            xp: self.xp,
            xp_into_level: self.xp_into_level,
            xp_to_next_level: self.xp_to_next_level,
            percent: self.percent,
            next_title: self.next_title.map(str::to_string),
        }
    }
}

/// Result of adding XP to a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpAward {
    pub amount: i32,
    pub total_xp: i32,
    pub level: i32,
    pub leveled_up: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Streak {
    pub current_streak: i32,
    pub longest_streak: i32,
    pub freezes_available: i32,
    pub last_check_in: Option<NaiveDate>,
}

impl Streak {
    pub fn from_entity(entity: entity::streak::Model) -> Self {
        Self {
            current_streak: entity.current_streak,
            longest_streak: entity.longest_streak,
            freezes_available: entity.freezes_available,
            last_check_in: entity.last_check_in,
        }
    }

    pub fn into_dto(self) -> StreakDto {
        StreakDto {
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            freezes_available: self.freezes_available,
            last_check_in: self.last_check_in,
        }
    }
}

/// Pure result of applying one check-in to a streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak: Streak,
    pub already_checked_in: bool,
    pub freezes_used: i32,
    pub freeze_earned: bool,
    pub streak_reset: bool,
    /// The new streak length is a multiple of 7.
    pub milestone: bool,
}

#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    pub update: StreakUpdate,
    pub xp_awarded: i32,
    pub leveled_up: bool,
    pub level: LevelProgress,
    pub new_badges: Vec<Badge>,
}

impl CheckInOutcome {
    pub fn into_dto(self) -> CheckInResultDto {
        CheckInResultDto {
            already_checked_in: self.update.already_checked_in,
            freezes_used: self.update.freezes_used,
            freeze_earned: self.update.freeze_earned,
            streak_reset: self.update.streak_reset,
            streak: self.update.streak.into_dto(),
            xp_awarded: self.xp_awarded,
            leveled_up: self.leveled_up,
            level: self.level.into_dto(),
            new_badges: self.new_badges.into_iter().map(Badge::into_dto).collect(),
        }
    }
}

/// Stat a badge requirement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRequirement {
    PostsRead,
    Comments,
    Reactions,
    Votes,
    Streak,
    Level,
    Xp,
}

impl BadgeRequirement {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "posts_read" => Some(Self::PostsRead),
            "comments" => Some(Self::Comments),
            "reactions" => Some(Self::Reactions),
            "votes" => Some(Self::Votes),
            "streak" => Some(Self::Streak),
            "level" => Some(Self::Level),
            "xp" => Some(Self::Xp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub requirement_type: String,
    pub requirement_value: i32,
    pub xp_reward: i32,
}

impl Badge {
    pub fn from_entity(entity: entity::badge::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            description: entity.description,
            icon: entity.icon,
            requirement_type: entity.requirement_type,
            requirement_value: entity.requirement_value,
            xp_reward: entity.xp_reward,
        }
    }

    pub fn into_dto(self) -> BadgeDto {
        BadgeDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            icon: self.icon,
            requirement_type: self.requirement_type,
            requirement_value: self.requirement_value,
            xp_reward: self.xp_reward,
        }
    }
}

/// A badge together with when the visitor earned it.
#[derive(Debug, Clone)]
pub struct VisitorBadge {
    pub badge: Badge,
    pub earned_at: Option<DateTime<Utc>>,
}

impl VisitorBadge {
    pub fn into_dto(self) -> VisitorBadgeDto {
        VisitorBadgeDto {
            badge: self.badge.into_dto(),
            earned_at: self.earned_at,
        }
    }
}

/// Counters badges are evaluated against.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitorStats {
    pub posts_read: i32,
    pub comments: i32,
    pub reactions: i32,
    pub votes: i32,
    pub streak: i32,
    pub level: i32,
    pub xp: i32,
}

impl VisitorStats {
    pub fn value_for(&self, requirement: BadgeRequirement) -> i32 {
        match requirement {
            BadgeRequirement::PostsRead => self.posts_read,
            BadgeRequirement::Comments => self.comments,
            BadgeRequirement::Reactions => self.reactions,
            BadgeRequirement::Votes => self.votes,
            BadgeRequirement::Streak => self.streak,
            BadgeRequirement::Level => self.level,
            BadgeRequirement::Xp => self.xp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BadgeParams {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub requirement_type: Option<String>,
    pub requirement_value: Option<i32>,
    pub xp_reward: Option<i32>,
}

impl BadgeParams {
    pub fn from_create_dto(dto: CreateBadgeDto) -> Self {
        Self {
            slug: Some(dto.slug),
            name: Some(dto.name),
            description: Some(dto.description),
            icon: Some(dto.icon),
            requirement_type: Some(dto.requirement_type),
            requirement_value: Some(dto.requirement_value),
            xp_reward: Some(dto.xp_reward),
        }
    }

    pub fn from_update_dto(dto: UpdateBadgeDto) -> Self {
        Self {
            slug: None,
            name: dto.name,
            description: dto.description,
            icon: dto.icon,
            requirement_type: dto.requirement_type,
            requirement_value: dto.requirement_value,
            xp_reward: dto.xp_reward,
        }
    }
}

/// Action types that advance daily tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    ReadPost,
    Comment,
    Reaction,
    PollVote,
    CheckIn,
}

impl TaskAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadPost => "read_post",
            Self::Comment => "comment",
            Self::Reaction => "reaction",
            Self::PollVote => "poll_vote",
            Self::CheckIn => "check_in",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DailyTask {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub action_type: String,
    pub target: i32,
    pub xp_reward: i32,
    pub active: bool,
}

impl DailyTask {
    pub fn from_entity(entity: entity::daily_task::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            description: entity.description,
            action_type: entity.action_type,
            target: entity.target,
            xp_reward: entity.xp_reward,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> DailyTaskDto {
        DailyTaskDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            action_type: self.action_type,
            target: self.target,
            xp_reward: self.xp_reward,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DailyTaskParams {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub action_type: Option<String>,
    pub target: Option<i32>,
    pub xp_reward: Option<i32>,
    pub active: Option<bool>,
}

impl DailyTaskParams {
    pub fn from_create_dto(dto: CreateDailyTaskDto) -> Self {
        Self {
            slug: Some(dto.slug),
            title: Some(dto.title),
            description: Some(dto.description),
            action_type: Some(dto.action_type),
            target: Some(dto.target),
            xp_reward: Some(dto.xp_reward),
            active: Some(dto.active),
        }
    }

    pub fn from_update_dto(dto: UpdateDailyTaskDto) -> Self {
        Self {
            slug: None,
            title: dto.title,
            description: dto.description,
            action_type: dto.action_type,
            target: dto.target,
            xp_reward: dto.xp_reward,
            active: dto.active,
        }
    }
}

/// A task together with one visitor's progress for a given day.
#[derive(Debug, Clone)]
pub struct TaskProgress {
    pub task: DailyTask,
    pub progress: i32,
    pub completed: bool,
    pub claimed: bool,
}

impl TaskProgress {
    pub fn into_dto(self) -> TaskProgressDto {
        TaskProgressDto {
            task_id: self.task.id,
            slug: self.task.slug,
            title: self.task.title,
            description: self.task.description,
            action_type: self.task.action_type,
            target: self.task.target,
            progress: self.progress,
            completed: self.completed,
            claimed: self.claimed,
            xp_reward: self.task.xp_reward,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClaimOutcome {
    pub task_id: i32,
    pub award: XpAward,
    pub new_badges: Vec<Badge>,
}

impl ClaimOutcome {
    pub fn into_dto(self) -> ClaimTaskResultDto {
        ClaimTaskResultDto {
            task_id: self.task_id,
            xp_awarded: self.award.amount,
            total_xp: self.award.total_xp,
            level: self.award.level,
            leveled_up: self.award.leveled_up,
            new_badges: self.new_badges.into_iter().map(Badge::into_dto).collect(),
        }
    }
}

/// Visitor actions that feed the activity pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    ReadPost,
    Comment,
    Reaction,
    PollVote,
}

impl Activity {
    pub fn task_action(&self) -> TaskAction {
        match self {
            Self::ReadPost => TaskAction::ReadPost,
            Self::Comment => TaskAction::Comment,
            Self::Reaction => TaskAction::Reaction,
            Self::PollVote => TaskAction::PollVote,
        }
    }

    /// Reason recorded on the XP transaction.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ReadPost => "read_post",
            Self::Comment => "comment",
            Self::Reaction => "reaction",
            Self::PollVote => "poll_vote",
        }
    }
}

/// What the activity pipeline granted.
#[derive(Debug, Clone, Default)]
pub struct ActivityOutcome {
    pub xp_awarded: i32,
    pub leveled_up: bool,
    pub new_badges: Vec<Badge>,
}

#[derive(Debug, Clone)]
pub struct ReadingEntry {
    pub post_id: i32,
    pub post_slug: String,
    pub post_title: String,
    pub progress: i32,
    pub completed: bool,
    pub read_at: DateTime<Utc>,
}

impl ReadingEntry {
    pub fn into_dto(self) -> ReadingHistoryDto {
        ReadingHistoryDto {
            post_id: self.post_id,
            post_slug: self.post_slug,
            post_title: self.post_title,
            progress: self.progress,
            completed: self.completed,
            read_at: self.read_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReadOutcome {
    pub post_id: i32,
    pub progress: i32,
    pub completed: bool,
    pub newly_completed: bool,
    pub activity: ActivityOutcome,
}

impl ReadOutcome {
    pub fn into_dto(self) -> ReadResultDto {
        ReadResultDto {
            post_id: self.post_id,
            progress: self.progress,
            completed: self.completed,
            newly_completed: self.newly_completed,
            xp_awarded: self.activity.xp_awarded,
            leveled_up: self.activity.leveled_up,
            new_badges: self
                .activity
                .new_badges
                .into_iter()
                .map(Badge::into_dto)
                .collect(),
        }
    }
}
