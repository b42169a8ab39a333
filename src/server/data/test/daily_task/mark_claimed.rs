use super::*;

/// Tests a completed task can be claimed exactly once.
///
/// Expected: true then false
#[tokio::test]
async fn claims_completed_task_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let task = create_task(db, "poll_vote", 1, 15).await?;

    let repo = DailyTaskRepository::new(db);
    let row = repo
        .save_progress(&visitor.visitor_id, task.id, day(), 1, true)
        .await?;

    assert!(repo.mark_claimed(row.id).await?);
    assert!(!repo.mark_claimed(row.id).await?);

    Ok(())
}

/// Tests an incomplete task cannot be claimed.
///
/// Expected: false and the row stays unclaimed
#[tokio::test]
async fn refuses_incomplete_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let task = create_task(db, "poll_vote", 2, 15).await?;

    let repo = DailyTaskRepository::new(db);
    let row = repo
        .save_progress(&visitor.visitor_id, task.id, day(), 1, false)
        .await?;

    assert!(!repo.mark_claimed(row.id).await?);
    let stored = repo
        .find_progress(&visitor.visitor_id, task.id, day())
        .await?
        .unwrap();
    assert!(!stored.claimed);

    Ok(())
}
