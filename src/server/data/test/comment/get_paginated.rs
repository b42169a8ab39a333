use super::*;

/// Tests the pending-only admin listing.
///
/// Expected: Ok with only unapproved comments and matching counts
#[tokio::test]
async fn lists_pending_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    CommentFactory::new(db, post.id).build().await?;
    let pending = CommentFactory::new(db, post.id).approved(false).build().await?;

    let repo = CommentRepository::new(db);
    let (comments, total) = repo.get_paginated(true, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(comments[0].id, pending.id);
    assert_eq!(repo.count(true).await?, 1);
    assert_eq!(repo.count(false).await?, 2);

    Ok(())
}
