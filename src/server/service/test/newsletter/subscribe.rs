use super::*;

/// Tests subscribing the same email twice with different case.
///
/// Expected: one active subscriber with the lowercased email
#[tokio::test]
async fn subscribe_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsletterService::new(db);
    let first = service.subscribe("Doc.Gia@Mail.VN").await?;
    let second = service.subscribe("doc.gia@mail.vn ").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.email, "doc.gia@mail.vn");
    assert!(second.active);
    assert_eq!(service.list(0, 10).await?.total, 1);

    Ok(())
}

/// Tests unsubscribing and subscribing again.
///
/// Expected: inactive with a timestamp after unsubscribe, active again afterwards
#[tokio::test]
async fn resubscribe_reactivates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsletterService::new(db);
    service.subscribe("ban@doc.vn").await?;

    let unsubscribed = service.unsubscribe("ban@doc.vn").await?;
    assert!(!unsubscribed.active);
    assert!(unsubscribed.unsubscribed_at.is_some());

    let again = service.subscribe("ban@doc.vn").await?;
    assert!(again.active);
    assert!(again.unsubscribed_at.is_none());

    Ok(())
}

/// Tests unsubscribing an unknown email.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unsubscribe_unknown_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NewsletterService::new(db).unsubscribe("la@mat.vn").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
