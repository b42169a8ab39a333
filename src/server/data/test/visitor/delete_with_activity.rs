use super::*;

/// Tests that deleting a visitor removes every gamification row they own.
///
/// Covers XP, badges, streak, daily task progress and reading history.
///
/// Expected: Ok(true), nothing left for the visitor and the other visitor untouched
#[tokio::test]
async fn removes_profile_and_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post, visitor) = create_post_and_visitor(db).await?;
    let other = create_visitor(db).await?;
    let badge = create_badge(db, "xp", 1, 0).await?;
    let task = create_task(db, "comment", 1, 10).await?;
    let now = Utc::now();

    create_xp_transaction(db, &visitor.visitor_id, 10, now).await?;
    create_xp_transaction(db, &other.visitor_id, 10, now).await?;
    BadgeRepository::new(db)
        .award(&visitor.visitor_id, badge.id, now)
        .await?;
    StreakRepository::new(db)
        .save(
            &visitor.visitor_id,
            &Streak {
                current_streak: 3,
                longest_streak: 3,
                freezes_available: 0,
                last_check_in: Some(now.date_naive()),
            },
        )
        .await?;
    DailyTaskRepository::new(db)
        .save_progress(&visitor.visitor_id, task.id, now.date_naive(), 1, true)
        .await?;
    ReadingHistoryRepository::new(db)
        .upsert(&visitor.visitor_id, post.id, 100, true, now)
        .await?;

    let repo = VisitorRepository::new(db);
    let deleted = repo.delete_with_activity(&visitor.visitor_id).await?;

    assert!(deleted);
    assert!(repo.find(&visitor.visitor_id).await?.is_none());
    assert!(repo.find(&other.visitor_id).await?.is_some());
    assert_eq!(entity::prelude::XpTransaction::find().count(db).await?, 1);
    assert_eq!(entity::prelude::UserBadge::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Streak::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserDailyTask::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ReadingHistory::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a visitor that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_visitor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VisitorRepository::new(db);
    assert!(!repo.delete_with_activity("visitor-missing").await?);

    Ok(())
}
