use super::*;

/// Tests a temporary ban and its expiry.
///
/// Expected: banned before expiry, not banned after, and cleanup removes the row
#[tokio::test]
async fn temporary_ban_expires() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SecurityService::new(db);
    let now = Utc::now();

    let ban = service
        .ban(
            CreateBanParams {
                ip_hash: "iphash-spam".to_string(),
                reason: "Spam bình luận".to_string(),
                duration: Some(Duration::hours(1)),
            },
            now,
        )
        .await?;

    assert_eq!(ban.expires_at, Some(now + Duration::hours(1)));
    assert!(service.is_banned("iphash-spam", now).await?);
    assert!(!service.is_banned("iphash-other", now).await?);

    let later = now + Duration::hours(2);
    assert!(!service.is_banned("iphash-spam", later).await?);

    let (_, bans) = service.cleanup_expired(later).await?;
    assert_eq!(bans, 1);

    Ok(())
}

/// Tests that a permanent ban survives cleanup.
///
/// Expected: still banned far in the future and no rows purged
#[tokio::test]
async fn permanent_ban_is_kept() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SecurityService::new(db);
    let now = Utc::now();

    service
        .ban(
            CreateBanParams {
                ip_hash: "iphash-spam".to_string(),
                reason: "Quấy rối".to_string(),
                duration: None,
            },
            now,
        )
        .await?;

    let far = now + Duration::days(365);
    assert!(service.is_banned("iphash-spam", far).await?);
    assert_eq!(service.cleanup_expired(far).await?.1, 0);

    Ok(())
}

/// Tests unbanning an unknown id.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unban_unknown_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SecurityService::new(db).unban(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
