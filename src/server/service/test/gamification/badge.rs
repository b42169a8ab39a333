use super::*;

/// Tests that a badge reward can unlock another badge.
///
/// Expected: both badges earned in one evaluation, rewards added to XP
#[tokio::test]
async fn evaluation_chains_through_badge_xp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = VisitorFactory::new(db).posts_read(1).build().await?;
    let reader = create_badge(db, "posts_read", 1, 50).await?;
    let rich = create_badge(db, "xp", 50, 10).await?;

    let earned = BadgeService::new(db).evaluate(&visitor.visitor_id).await?;

    let ids: Vec<i32> = earned.iter().map(|b| b.id).collect();
    assert!(ids.contains(&reader.id));
    assert!(ids.contains(&rich.id));

    let profile = VisitorRepository::new(db)
        .find(&visitor.visitor_id)
        .await?
        .unwrap();
    assert_eq!(profile.xp, 60);

    Ok(())
}

/// Tests evaluating again after everything was earned.
///
/// Expected: no badge awarded twice
#[tokio::test]
async fn badges_are_awarded_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = VisitorFactory::new(db).comments_count(5).build().await?;
    create_badge(db, "comments", 5, 20).await?;

    let service = BadgeService::new(db);
    assert_eq!(service.evaluate(&visitor.visitor_id).await?.len(), 1);
    assert!(service.evaluate(&visitor.visitor_id).await?.is_empty());

    let listed = service.list_for_visitor(&visitor.visitor_id).await?;
    assert!(listed[0].earned_at.is_some());

    Ok(())
}

/// Tests a badge whose threshold is not reached.
///
/// Expected: nothing earned and the badge listed without earned_at
#[tokio::test]
async fn unmet_requirement_is_not_awarded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    create_badge(db, "streak", 7, 20).await?;

    let service = BadgeService::new(db);
    assert!(service.evaluate(&visitor.visitor_id).await?.is_empty());

    let listed = service.list_for_visitor(&visitor.visitor_id).await?;
    assert!(listed[0].earned_at.is_none());

    Ok(())
}
