use super::*;

/// Tests that limiter rows are keyed by identity and action.
///
/// Expected: row found for the same pair with a count of 0, None for another action
#[tokio::test]
async fn finds_row_by_identifier_and_action() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitRepository::new(db);
    let reset_at = Utc::now() + Duration::minutes(1);
    repo.open_window("hash-a", "comment", reset_at).await?;

    let row = repo.find("hash-a", "comment").await?.unwrap();
    assert_eq!(row.count, 0);
    assert_eq!(row.reset_at, reset_at);
    assert!(repo.find("hash-a", "reaction").await?.is_none());

    Ok(())
}

/// Tests that opening a window twice keeps the first row.
///
/// Expected: no unique violation, the original reset time is kept
#[tokio::test]
async fn open_window_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitRepository::new(db);
    let first = Utc::now() + Duration::minutes(1);
    repo.open_window("hash-a", "comment", first).await?;
    repo.open_window("hash-a", "comment", first + Duration::minutes(5))
        .await?;

    let row = repo.find("hash-a", "comment").await?.unwrap();
    assert_eq!(row.reset_at, first);

    Ok(())
}
