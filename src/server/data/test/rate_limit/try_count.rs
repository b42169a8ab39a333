use super::*;

/// Tests that counting stops at the limit.
///
/// Expected: two counted requests, then false with the count left at 2
#[tokio::test]
async fn stops_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitRepository::new(db);
    let now = Utc::now();
    repo.open_window("hash-a", "comment", now + Duration::minutes(1))
        .await?;

    assert!(repo.try_count("hash-a", "comment", 2, now).await?);
    assert!(repo.try_count("hash-a", "comment", 2, now).await?);
    assert!(!repo.try_count("hash-a", "comment", 2, now).await?);

    let row = repo.find("hash-a", "comment").await?.unwrap();
    assert_eq!(row.count, 2);

    Ok(())
}

/// Tests that an elapsed window is neither counted nor restarted early.
///
/// Expected: try_count false on the elapsed window, restart only once it has ended
#[tokio::test]
async fn restarts_only_elapsed_windows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitRepository::new(db);
    let now = Utc::now();
    let reset_at = now + Duration::minutes(1);
    repo.open_window("hash-a", "comment", reset_at).await?;
    assert!(repo.try_count("hash-a", "comment", 5, now).await?);

    let next = now + Duration::minutes(2);
    assert!(!repo
        .restart_elapsed("hash-a", "comment", now, next)
        .await?);
    assert!(!repo.try_count("hash-a", "comment", 5, reset_at).await?);

    assert!(repo
        .restart_elapsed("hash-a", "comment", reset_at, next)
        .await?);
    let row = repo.find("hash-a", "comment").await?.unwrap();
    assert_eq!(row.count, 0);
    assert_eq!(row.reset_at, next);

    Ok(())
}
