use super::*;

/// Tests that only rows whose window has ended are purged.
///
/// Expected: 1 row deleted, the live window kept
#[tokio::test]
async fn deletes_only_expired_windows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = RateLimitRepository::new(db);
    repo.open_window("hash-a", "comment", now - Duration::seconds(1))
        .await?;
    repo.open_window("hash-b", "comment", now + Duration::minutes(5))
        .await?;

    let deleted = repo.delete_expired(now).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find("hash-a", "comment").await?.is_none());
    assert!(repo.find("hash-b", "comment").await?.is_some());

    Ok(())
}
