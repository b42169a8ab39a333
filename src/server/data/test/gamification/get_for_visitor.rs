use super::*;

/// Tests listing every badge with the visitor's earned state.
///
/// Expected: earned_at set only on the awarded badge
#[tokio::test]
async fn marks_earned_badges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let earned = create_badge(db, "posts_read", 1, 0).await?;
    let locked = create_badge(db, "posts_read", 10, 0).await?;

    let repo = BadgeRepository::new(db);
    repo.award(&visitor.visitor_id, earned.id, Utc::now()).await?;

    let badges = repo.get_for_visitor(&visitor.visitor_id).await?;

    assert_eq!(badges.len(), 2);
    let earned_entry = badges.iter().find(|b| b.badge.id == earned.id).unwrap();
    let locked_entry = badges.iter().find(|b| b.badge.id == locked.id).unwrap();
    assert!(earned_entry.earned_at.is_some());
    assert!(locked_entry.earned_at.is_none());

    Ok(())
}
