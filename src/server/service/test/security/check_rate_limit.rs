use super::*;

/// Tests the fixed window of the contact form (3 per hour).
///
/// Expected: three allowed requests with decreasing quota, then Blocked
#[tokio::test]
async fn blocks_after_limit_within_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SecurityService::new(db);
    let now = Utc::now();

    for remaining in [2, 1, 0] {
        let decision = service
            .check_rate_limit("iphash-a", RateAction::Contact, now)
            .await?;
        assert_eq!(decision, RateLimitDecision::Allowed { remaining });
    }

    let decision = service
        .check_rate_limit("iphash-a", RateAction::Contact, now + Duration::minutes(10))
        .await?;
    match decision {
        RateLimitDecision::Blocked { retry_after } => assert_eq!(retry_after, 50 * 60),
        other => panic!("expected Blocked, got {:?}", other),
    }

    Ok(())
}

/// Tests that an elapsed window starts over.
///
/// Expected: Allowed with full quota minus one after the window has passed
#[tokio::test]
async fn resets_after_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SecurityService::new(db);
    let now = Utc::now();

    for _ in 0..3 {
        service
            .check_rate_limit("iphash-a", RateAction::Contact, now)
            .await?;
    }

    let later = now + Duration::hours(1) + Duration::seconds(1);
    let decision = service
        .check_rate_limit("iphash-a", RateAction::Contact, later)
        .await?;

    assert_eq!(decision, RateLimitDecision::Allowed { remaining: 2 });

    Ok(())
}

/// Tests that identifiers and actions have separate windows.
///
/// Expected: another identity and another action are still allowed
#[tokio::test]
async fn windows_are_per_identifier_and_action() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SecurityService::new(db);
    let now = Utc::now();

    for _ in 0..4 {
        service
            .check_rate_limit("iphash-a", RateAction::Contact, now)
            .await?;
    }

    assert!(service
        .check_rate_limit("iphash-b", RateAction::Contact, now)
        .await?
        .is_allowed());
    assert!(service
        .check_rate_limit("iphash-a", RateAction::Newsletter, now)
        .await?
        .is_allowed());

    Ok(())
}

/// Tests concurrent requests from a fresh identity against the contact limit.
///
/// Expected: exactly three of six concurrent requests allowed, none failing
#[tokio::test]
async fn concurrent_requests_respect_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_security_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SecurityService::new(db);
    let now = Utc::now();

    let results = tokio::join!(
        service.check_rate_limit("iphash-burst", RateAction::Contact, now),
        service.check_rate_limit("iphash-burst", RateAction::Contact, now),
        service.check_rate_limit("iphash-burst", RateAction::Contact, now),
        service.check_rate_limit("iphash-burst", RateAction::Contact, now),
        service.check_rate_limit("iphash-burst", RateAction::Contact, now),
        service.check_rate_limit("iphash-burst", RateAction::Contact, now),
    );

    let decisions = [
        results.0?, results.1?, results.2?, results.3?, results.4?, results.5?,
    ];
    let allowed = decisions.iter().filter(|d| d.is_allowed()).count();

    assert_eq!(allowed, 3);

    Ok(())
}
