use super::*;

/// Tests awarding XP across a level threshold.
///
/// Verifies the profile total, the recomputed level and the ledger row.
///
/// Expected: Some(XpAward) with leveled_up true and one transaction stored
#[tokio::test]
async fn awards_xp_and_records_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = VisitorFactory::new(db).xp(95).build().await?;

    let repo = VisitorRepository::new(db);
    let award = repo
        .award_xp(&visitor.visitor_id, 10, "comment", |xp| if xp >= 100 { 2 } else { 1 })
        .await?
        .unwrap();

    assert_eq!(award.total_xp, 105);
    assert_eq!(award.level, 2);
    assert!(award.leveled_up);

    let stored = repo.find(&visitor.visitor_id).await?.unwrap();
    assert_eq!(stored.xp, 105);
    assert_eq!(stored.level, 2);

    let transactions = entity::prelude::XpTransaction::find().count(db).await?;
    assert_eq!(transactions, 1);

    Ok(())
}

/// Tests awarding XP to an unknown visitor.
///
/// Expected: Ok(None) and no transaction stored
#[tokio::test]
async fn returns_none_for_unknown_visitor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VisitorRepository::new(db);
    let award = repo.award_xp("visitor-missing", 10, "comment", |_| 1).await?;

    assert!(award.is_none());
    assert_eq!(entity::prelude::XpTransaction::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a negative award can't take the total below zero.
///
/// Expected: total_xp 0 while the ledger keeps the requested amount
#[tokio::test]
async fn clamps_total_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = VisitorFactory::new(db).xp(5).build().await?;

    let repo = VisitorRepository::new(db);
    let award = repo
        .award_xp(&visitor.visitor_id, -20, "admin_adjustment", |_| 1)
        .await?
        .unwrap();

    assert_eq!(award.total_xp, 0);
    assert_eq!(repo.find(&visitor.visitor_id).await?.unwrap().xp, 0);

    let transaction = entity::prelude::XpTransaction::find()
        .one(db)
        .await?
        .unwrap();
    assert_eq!(transaction.amount, -20);

    Ok(())
}
