use super::*;

/// Tests the activity pipeline for a comment.
///
/// Expected: counter, XP and the matching daily task all advance
#[tokio::test]
async fn records_comment_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    create_task(db, "comment", 1, 10).await?;

    let outcome = ActivityService::new(db)
        .record(&visitor.visitor_id, Activity::Comment)
        .await?;

    assert_eq!(outcome.xp_awarded, 15);

    let profile = VisitorRepository::new(db)
        .find(&visitor.visitor_id)
        .await?
        .unwrap();
    assert_eq!(profile.comments_count, 1);
    assert_eq!(profile.xp, 15);

    let today = crate::server::util::parse::local_date(Utc::now());
    let tasks = DailyTaskService::new(db)
        .today_tasks(&visitor.visitor_id, today)
        .await?;
    assert!(tasks[0].completed);

    Ok(())
}

/// Tests an activity from an unknown visitor id.
///
/// Expected: default outcome without error
#[tokio::test]
async fn ignores_unknown_visitor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ActivityService::new(db)
        .record("khong-co", Activity::Reaction)
        .await?;

    assert_eq!(outcome.xp_awarded, 0);
    assert!(outcome.new_badges.is_empty());

    Ok(())
}
