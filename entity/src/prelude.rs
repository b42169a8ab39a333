pub use super::admin_user::Entity as AdminUser;
pub use super::badge::Entity as Badge;
pub use super::banned_ip::Entity as BannedIp;
pub use super::comment::Entity as Comment;
pub use super::contact_message::Entity as ContactMessage;
pub use super::daily_task::Entity as DailyTask;
pub use super::leaderboard_cache::Entity as LeaderboardCache;
pub use super::newsletter_subscriber::Entity as NewsletterSubscriber;
pub use super::poll::Entity as Poll;
pub use super::poll_option::Entity as PollOption;
pub use super::poll_vote::Entity as PollVote;
pub use super::post::Entity as Post;
pub use super::rate_limit::Entity as RateLimit;
pub use super::reaction::Entity as Reaction;
pub use super::reading_history::Entity as ReadingHistory;
pub use super::streak::Entity as Streak;
pub use super::user_badge::Entity as UserBadge;
pub use super::user_daily_task::Entity as UserDailyTask;
pub use super::visitor_profile::Entity as VisitorProfile;
pub use super::xp_transaction::Entity as XpTransaction;
