use super::*;

/// Tests a banned caller.
///
/// Expected: Err(AppError::Banned) before any rate limit row is written
#[tokio::test]
async fn rejects_banned_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SecurityService::new(db)
        .ban(
            CreateBanParams {
                ip_hash: "iphash-xau".to_string(),
                reason: "Spam".to_string(),
                duration: None,
            },
            Utc::now(),
        )
        .await?;

    let result = SecurityGuard::new(db)
        .check(&identity("iphash-xau"), RateAction::Comment)
        .await;

    assert!(matches!(result, Err(AppError::Banned)));
    assert_eq!(
        entity::prelude::RateLimit::find().count(db).await?,
        0
    );

    Ok(())
}

/// Tests a caller exceeding the comment limit (5 per 10 minutes).
///
/// Expected: five passes, then Err(AppError::RateLimited) with a positive retry
#[tokio::test]
async fn rate_limits_after_quota() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = SecurityGuard::new(db);
    let caller = identity("iphash-nhanh");

    for _ in 0..5 {
        guard.check(&caller, RateAction::Comment).await?;
    }

    match guard.check(&caller, RateAction::Comment).await {
        Err(AppError::RateLimited { retry_after }) => assert!(retry_after >= 1),
        other => panic!("expected RateLimited, got {:?}", other.map(|_| ())),
    }

    Ok(())
}
