use sea_orm_migration::prelude::*;

use super::{
    m20260106_000013_create_badge_table::Badge, m20260106_000015_create_daily_task_table::DailyTask,
};

/// (slug, name, description, icon, requirement type, requirement value, xp reward)
const BADGES: &[(&str, &str, &str, &str, &str, i32, i32)] = &[
    ("first-read", "Bước đầu tiên", "Đọc bài viết đầu tiên", "📖", "posts_read", 1, 10),
    ("bookworm", "Mọt sách", "Đọc 10 bài viết", "📚", "posts_read", 10, 50),
    ("scholar", "Học giả", "Đọc 50 bài viết", "🎓", "posts_read", 50, 200),
    ("first-comment", "Lên tiếng", "Viết bình luận đầu tiên", "💬", "comments", 1, 10),
    ("chatterbox", "Người nhiều chuyện", "Viết 25 bình luận", "🗣️", "comments", 25, 100),
    ("reactor", "Cảm xúc dạt dào", "Thả 50 cảm xúc", "❤️", "reactions", 50, 50),
    ("voter", "Cử tri", "Tham gia 5 cuộc bình chọn", "🗳️", "votes", 5, 30),
    ("streak-7", "Một tuần chăm chỉ", "Điểm danh 7 ngày liên tiếp", "🔥", "streak", 7, 50),
    ("streak-30", "Không thể ngăn cản", "Điểm danh 30 ngày liên tiếp", "⚡", "streak", 30, 200),
    ("level-5", "Người đóng góp", "Đạt cấp độ 5", "⭐", "level", 5, 100),
    ("bo-master", "Bơ Master", "Đạt cấp độ 10", "🥑", "level", 10, 500),
];

/// (slug, title, description, action type, target, xp reward)
const DAILY_TASKS: &[(&str, &str, &str, &str, i32, i32)] = &[
    ("daily-check-in", "Điểm danh", "Điểm danh hôm nay", "check_in", 1, 5),
    ("daily-read", "Đọc bài", "Đọc 3 bài viết", "read_post", 3, 20),
    ("daily-comment", "Bình luận", "Viết 1 bình luận", "comment", 1, 15),
    ("daily-react", "Thả cảm xúc", "Thả cảm xúc cho 5 bài viết", "reaction", 5, 10),
    ("daily-vote", "Bình chọn", "Tham gia 1 cuộc bình chọn", "poll_vote", 1, 10),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut badges = Query::insert();
        badges.into_table(Badge::Table).columns([
            Badge::Slug,
            Badge::Name,
            Badge::Description,
            Badge::Icon,
            Badge::RequirementType,
            Badge::RequirementValue,
            Badge::XpReward,
        ]);
        for (slug, name, description, icon, requirement_type, requirement_value, xp_reward) in
            BADGES
        {
            badges.values_panic([
                (*slug).into(),
                (*name).into(),
                (*description).into(),
                (*icon).into(),
                (*requirement_type).into(),
                (*requirement_value).into(),
                (*xp_reward).into(),
            ]);
        }
        manager.exec_stmt(badges).await?;

        let mut tasks = Query::insert();
        tasks.into_table(DailyTask::Table).columns([
            DailyTask::Slug,
            DailyTask::Title,
            DailyTask::Description,
            DailyTask::ActionType,
            DailyTask::Target,
            DailyTask::XpReward,
            DailyTask::Active,
        ]);
        for (slug, title, description, action_type, target, xp_reward) in DAILY_TASKS {
            tasks.values_panic([
                (*slug).into(),
                (*title).into(),
                (*description).into(),
                (*action_type).into(),
                (*target).into(),
                (*xp_reward).into(),
                true.into(),
            ]);
        }
        manager.exec_stmt(tasks).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Badge::Table)
                    .and_where(
                        Expr::col(Badge::Slug).is_in(BADGES.iter().map(|badge| badge.0)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(DailyTask::Table)
                    .and_where(
                        Expr::col(DailyTask::Slug).is_in(DAILY_TASKS.iter().map(|task| task.0)),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
