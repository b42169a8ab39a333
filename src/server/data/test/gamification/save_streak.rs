use super::*;

/// Tests inserting then updating a visitor's streak row.
///
/// Expected: the second save overwrites the first
#[tokio::test]
async fn inserts_then_updates_streak() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let repo = StreakRepository::new(db);

    assert!(repo.find(&visitor.visitor_id).await?.is_none());

    let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    repo.save(
        &visitor.visitor_id,
        &Streak {
            current_streak: 1,
            longest_streak: 1,
            freezes_available: 0,
            last_check_in: Some(day),
        },
    )
    .await?;
    repo.save(
        &visitor.visitor_id,
        &Streak {
            current_streak: 2,
            longest_streak: 2,
            freezes_available: 0,
            last_check_in: day.succ_opt(),
        },
    )
    .await?;

    let streak = repo.find(&visitor.visitor_id).await?.unwrap();
    assert_eq!(streak.current_streak, 2);
    assert_eq!(streak.last_check_in, day.succ_opt());

    Ok(())
}
