use super::*;

/// Tests a first check-in.
///
/// Expected: streak 1 and check-in XP granted
#[tokio::test]
async fn first_check_in_starts_streak() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;

    let outcome = StreakService::new(db)
        .check_in(&visitor.visitor_id, day(1))
        .await?;

    assert_eq!(outcome.update.streak.current_streak, 1);
    assert_eq!(outcome.xp_awarded, 5);
    assert!(!outcome.update.already_checked_in);

    Ok(())
}

/// Tests checking in twice on the same day.
///
/// Expected: second call grants nothing and keeps the streak
#[tokio::test]
async fn second_check_in_same_day_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let service = StreakService::new(db);

    service.check_in(&visitor.visitor_id, day(1)).await?;
    let again = service.check_in(&visitor.visitor_id, day(1)).await?;

    assert!(again.update.already_checked_in);
    assert_eq!(again.xp_awarded, 0);
    assert_eq!(again.update.streak.current_streak, 1);

    let profile = VisitorRepository::new(db)
        .find(&visitor.visitor_id)
        .await?
        .unwrap();
    assert_eq!(profile.xp, 5);

    Ok(())
}

/// Tests seven consecutive days.
///
/// Expected: milestone bonus on day 7 and a freeze earned
#[tokio::test]
async fn seventh_day_is_milestone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let service = StreakService::new(db);

    for d in 1..7 {
        service.check_in(&visitor.visitor_id, day(d)).await?;
    }
    let seventh = service.check_in(&visitor.visitor_id, day(7)).await?;

    assert!(seventh.update.milestone);
    assert!(seventh.update.freeze_earned);
    assert_eq!(seventh.xp_awarded, 25);
    assert_eq!(seventh.update.streak.freezes_available, 1);

    let streak = service.get(&visitor.visitor_id).await?;
    assert_eq!(streak.longest_streak, 7);

    Ok(())
}

/// Tests check-in for an unknown visitor.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_visitor_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StreakService::new(db).check_in("ai-do", day(1)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
