use super::*;

/// Tests completing and claiming a check-in task.
///
/// Expected: task completed after one check-in, claim grants the reward once
#[tokio::test]
async fn claim_after_completion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let task = create_task(db, "check_in", 1, 30).await?;

    StreakService::new(db)
        .check_in(&visitor.visitor_id, day(2))
        .await?;

    let service = DailyTaskService::new(db);
    let tasks = service.today_tasks(&visitor.visitor_id, day(2)).await?;
    let progress = tasks.iter().find(|t| t.task.id == task.id).unwrap();
    assert!(progress.completed);
    assert!(!progress.claimed);

    let outcome = service.claim(&visitor.visitor_id, task.id, day(2)).await?;
    assert_eq!(outcome.award.amount, 30);
    assert_eq!(outcome.award.total_xp, 35);

    let again = service.claim(&visitor.visitor_id, task.id, day(2)).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests claiming before the target is reached.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn claim_before_completion_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let task = create_task(db, "reaction", 3, 10).await?;

    let service = DailyTaskService::new(db);
    service
        .record_action(&visitor.visitor_id, TaskAction::Reaction, day(2))
        .await?;

    let result = service.claim(&visitor.visitor_id, task.id, day(2)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let tasks = service.today_tasks(&visitor.visitor_id, day(2)).await?;
    assert_eq!(tasks[0].progress, 1);

    Ok(())
}

/// Tests that progress is per day.
///
/// Expected: yesterday's progress does not show today
#[tokio::test]
async fn progress_resets_each_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    create_task(db, "comment", 2, 10).await?;

    let service = DailyTaskService::new(db);
    service
        .record_action(&visitor.visitor_id, TaskAction::Comment, day(2))
        .await?;

    let today = service.today_tasks(&visitor.visitor_id, day(3)).await?;
    assert_eq!(today[0].progress, 0);
    assert!(!today[0].completed);

    Ok(())
}

/// Tests recording more actions than a task's target.
///
/// Expected: progress stops at the target and the task stays completed
#[tokio::test]
async fn progress_caps_at_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    create_task(db, "reaction", 2, 10).await?;

    let service = DailyTaskService::new(db);
    for _ in 0..4 {
        service
            .record_action(&visitor.visitor_id, TaskAction::Reaction, day(2))
            .await?;
    }

    let tasks = service.today_tasks(&visitor.visitor_id, day(2)).await?;
    assert_eq!(tasks[0].progress, 2);
    assert!(tasks[0].completed);

    Ok(())
}
