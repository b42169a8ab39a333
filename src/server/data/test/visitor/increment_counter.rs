use super::*;

/// Tests bumping activity counters.
///
/// Expected: only the targeted counters change
#[tokio::test]
async fn increments_selected_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = create_visitor(db).await?;

    let repo = VisitorRepository::new(db);
    repo.increment_counter(&visitor.visitor_id, VisitorCounter::Reactions)
        .await?;
    repo.increment_counter(&visitor.visitor_id, VisitorCounter::Reactions)
        .await?;
    repo.increment_counter(&visitor.visitor_id, VisitorCounter::Votes)
        .await?;

    let stored = repo.find(&visitor.visitor_id).await?.unwrap();
    assert_eq!(stored.reactions_count, 2);
    assert_eq!(stored.votes_count, 1);
    assert_eq!(stored.posts_read, 0);
    assert_eq!(stored.comments_count, 0);

    Ok(())
}
