use super::*;

/// Tests that inactive tasks and other actions are skipped.
///
/// Expected: only the active task for the requested action
#[tokio::test]
async fn returns_active_tasks_for_action() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = create_task(db, "comment", 2, 20).await?;
    let inactive = create_task(db, "comment", 1, 10).await?;
    create_task(db, "reaction", 3, 10).await?;

    let repo = DailyTaskRepository::new(db);
    repo.update(
        inactive.id,
        crate::server::model::gamification::DailyTaskParams {
            slug: None,
            title: None,
            description: None,
            action_type: None,
            target: None,
            xp_reward: None,
            active: Some(false),
        },
    )
    .await?;

    let tasks = repo.get_active_by_action("comment").await?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, wanted.id);

    Ok(())
}
