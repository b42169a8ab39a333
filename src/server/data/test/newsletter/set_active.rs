use super::*;

/// Tests unsubscribing then resubscribing the same email.
///
/// Expected: unsubscribed_at set while inactive and cleared on reactivation
#[tokio::test]
async fn toggles_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsletterRepository::new(db);
    let subscriber = repo.create("ban@example.com").await?;
    assert_eq!(repo.count_active().await?, 1);

    let inactive = repo
        .set_active(subscriber.id, false, Utc::now())
        .await?
        .unwrap();
    assert!(!inactive.active);
    assert!(inactive.unsubscribed_at.is_some());
    assert_eq!(repo.count_active().await?, 0);

    let active = repo
        .set_active(subscriber.id, true, Utc::now())
        .await?
        .unwrap();
    assert!(active.active);
    assert!(active.unsubscribed_at.is_none());

    Ok(())
}

/// Tests looking up a subscriber by email.
///
/// Expected: Some for the stored email, None otherwise
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsletterRepository::new(db);
    repo.create("doc-gia@example.com").await?;

    assert!(repo.find_by_email("doc-gia@example.com").await?.is_some());
    assert!(repo.find_by_email("khac@example.com").await?.is_none());

    Ok(())
}
