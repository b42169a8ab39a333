use super::*;

/// Tests banning an already banned hash replaces the ban instead of duplicating it.
///
/// Expected: one row with the latest reason and expiry
#[tokio::test]
async fn replaces_existing_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BannedIpRepository::new(db);
    let first = repo
        .upsert("hash-a", "Lần đầu", Some(Utc::now() + Duration::hours(1)))
        .await?;
    let second = repo.upsert("hash-a", "Vĩnh viễn", None).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.reason, "Vĩnh viễn");
    assert!(second.expires_at.is_none());

    let (bans, total) = repo.get_paginated(0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(bans.len(), 1);

    Ok(())
}
