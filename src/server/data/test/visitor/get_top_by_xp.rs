use super::*;

/// Tests all-time ranking by profile XP.
///
/// Expected: visitors ordered by XP descending, zero-XP visitors omitted
#[tokio::test]
async fn orders_by_total_xp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let low = VisitorFactory::new(db).xp(50).build().await?;
    let high = VisitorFactory::new(db).xp(500).build().await?;
    VisitorFactory::new(db).xp(0).build().await?;

    let repo = VisitorRepository::new(db);
    let top = repo.get_top_by_xp(20).await?;

    let ids: Vec<&str> = top.iter().map(|v| v.visitor_id.as_str()).collect();
    assert_eq!(ids, vec![high.visitor_id.as_str(), low.visitor_id.as_str()]);

    Ok(())
}

/// Tests reading XP transactions inside a period.
///
/// Expected: only transactions at or after `since` are returned
#[tokio::test]
async fn reads_xp_since_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;
    let now = Utc::now();
    create_xp_transaction(db, &visitor.visitor_id, 10, now - Duration::days(10)).await?;
    create_xp_transaction(db, &visitor.visitor_id, 15, now - Duration::days(1)).await?;

    let repo = VisitorRepository::new(db);
    let rows = repo.get_xp_since(now - Duration::days(7)).await?;

    assert_eq!(rows, vec![(visitor.visitor_id.clone(), 15)]);

    Ok(())
}
