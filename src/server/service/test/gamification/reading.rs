use super::*;

/// Tests reading a post past the completion threshold.
///
/// Expected: completed once, read XP granted only the first time
#[tokio::test]
async fn completion_rewards_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post, visitor) = create_post_and_visitor(db).await?;
    let service = ReadingService::new(db);

    let partial = service
        .record_read(&visitor.visitor_id, post.id, 40, Utc::now())
        .await?;
    assert!(!partial.completed);
    assert_eq!(partial.activity.xp_awarded, 0);

    let done = service
        .record_read(&visitor.visitor_id, post.id, 85, Utc::now())
        .await?;
    assert!(done.newly_completed);
    assert_eq!(done.activity.xp_awarded, 10);

    let again = service
        .record_read(&visitor.visitor_id, post.id, 100, Utc::now())
        .await?;
    assert!(!again.newly_completed);
    assert_eq!(again.activity.xp_awarded, 0);

    let profile = VisitorRepository::new(db)
        .find(&visitor.visitor_id)
        .await?
        .unwrap();
    assert_eq!(profile.posts_read, 1);

    Ok(())
}

/// Tests that stored progress never decreases.
///
/// Expected: progress stays at the highest value reported
#[tokio::test]
async fn progress_never_decreases() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post, visitor) = create_post_and_visitor(db).await?;
    let service = ReadingService::new(db);

    service
        .record_read(&visitor.visitor_id, post.id, 60, Utc::now())
        .await?;
    let outcome = service
        .record_read(&visitor.visitor_id, post.id, 20, Utc::now())
        .await?;

    assert_eq!(outcome.progress, 60);

    let history = service.history(&visitor.visitor_id).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].progress, 60);

    Ok(())
}

/// Tests reading a draft.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unpublished_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let draft = create_draft(db).await?;

    let result = ReadingService::new(db)
        .record_read(&visitor.visitor_id, draft.id, 100, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
