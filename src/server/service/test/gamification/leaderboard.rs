use super::*;

/// Tests the all-time ranking.
///
/// Expected: visitors ordered by XP, zero-XP visitors left out
#[tokio::test]
async fn all_time_orders_by_xp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VisitorFactory::new(db).display_name("An").xp(50).build().await?;
    VisitorFactory::new(db)
        .display_name("Bình")
        .xp(300)
        .level(3)
        .build()
        .await?;
    create_visitor(db).await?;

    let board = LeaderboardService::new(db)
        .get(LeaderboardPeriod::All, Utc::now())
        .await?;

    assert_eq!(board.entries.len(), 2);
    assert_eq!(board.entries[0].display_name, "Bình");
    assert_eq!(board.entries[0].rank, 1);
    assert_eq!(board.entries[1].xp, 50);

    Ok(())
}

/// Tests the weekly ranking.
///
/// Expected: only XP earned in the last seven days counts
#[tokio::test]
async fn weekly_sums_recent_transactions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = VisitorFactory::new(db).display_name("Cũ").xp(500).build().await?;
    let fresh = VisitorFactory::new(db).display_name("Mới").xp(40).build().await?;

    create_xp_transaction(db, &old.visitor_id, 500, now - Duration::days(20)).await?;
    create_xp_transaction(db, &fresh.visitor_id, 25, now - Duration::days(1)).await?;
    create_xp_transaction(db, &fresh.visitor_id, 15, now - Duration::hours(2)).await?;

    let board = LeaderboardService::new(db)
        .get(LeaderboardPeriod::Weekly, now)
        .await?;

    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.entries[0].display_name, "Mới");
    assert_eq!(board.entries[0].xp, 40);

    Ok(())
}

/// Tests that a fresh cache is served until refreshed.
///
/// Expected: new XP ignored by get within the TTL, visible after refresh
#[tokio::test]
async fn serves_cache_until_refresh() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let service = LeaderboardService::new(db);

    VisitorFactory::new(db).xp(10).build().await?;
    assert_eq!(service.get(LeaderboardPeriod::All, now).await?.entries.len(), 1);

    VisitorFactory::new(db).xp(20).build().await?;
    let cached = service
        .get(LeaderboardPeriod::All, now + Duration::minutes(1))
        .await?;
    assert_eq!(cached.entries.len(), 1);

    let refreshed = service
        .refresh(LeaderboardPeriod::All, now + Duration::minutes(1))
        .await?;
    assert_eq!(refreshed.entries.len(), 2);

    Ok(())
}
