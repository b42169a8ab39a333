use super::*;

/// Tests that a badge is only awarded once per visitor.
///
/// Expected: true on the first award, false on the second, one earned badge
#[tokio::test]
async fn awards_badge_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let badge = create_badge(db, "comments", 1, 10).await?;

    let repo = BadgeRepository::new(db);
    assert!(repo.award(&visitor.visitor_id, badge.id, Utc::now()).await?);
    assert!(!repo.award(&visitor.visitor_id, badge.id, Utc::now()).await?);
    assert_eq!(repo.count_earned(&visitor.visitor_id).await?, 1);

    Ok(())
}
