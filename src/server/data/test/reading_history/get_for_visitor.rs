use super::*;

/// Tests the history listing joins post data and orders by last read.
///
/// Expected: most recent read first, with post slug and title
#[tokio::test]
async fn lists_recent_reads_with_post_data() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (older_post, visitor) = create_post_and_visitor(db).await?;
    let newer_post = PostFactory::new(db)
        .slug("bai-moi")
        .title("Bài mới")
        .build()
        .await?;

    let now = Utc::now();
    let repo = ReadingHistoryRepository::new(db);
    repo.upsert(&visitor.visitor_id, older_post.id, 100, true, now - Duration::hours(1))
        .await?;
    repo.upsert(&visitor.visitor_id, newer_post.id, 30, false, now)
        .await?;

    let history = repo.get_for_visitor(&visitor.visitor_id, 20).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].post_slug, "bai-moi");
    assert_eq!(history[0].post_title, "Bài mới");
    assert_eq!(history[1].post_id, older_post.id);
    assert!(history[1].completed);

    Ok(())
}
