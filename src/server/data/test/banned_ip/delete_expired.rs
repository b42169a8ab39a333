use super::*;

/// Tests purging keeps permanent and live bans.
///
/// Expected: only the expired ban is removed
#[tokio::test]
async fn removes_only_expired_bans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = BannedIpRepository::new(db);
    repo.upsert("hash-old", "Hết hạn", Some(now - Duration::minutes(1)))
        .await?;
    repo.upsert("hash-live", "Còn hạn", Some(now + Duration::days(1)))
        .await?;
    repo.upsert("hash-forever", "Vĩnh viễn", None).await?;

    let deleted = repo.delete_expired(now).await?;

    assert_eq!(deleted, 1);
    let (_, total) = repo.get_paginated(0, 10).await?;
    assert_eq!(total, 2);

    Ok(())
}
