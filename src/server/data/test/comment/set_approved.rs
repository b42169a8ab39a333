use super::*;

/// Tests approving a pending comment.
///
/// Expected: Ok(Some) with approved set to true
#[tokio::test]
async fn approves_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let pending = CommentFactory::new(db, post.id).approved(false).build().await?;

    let repo = CommentRepository::new(db);
    let comment = repo.set_approved(pending.id, true).await?;

    assert!(comment.is_some_and(|c| c.approved));

    Ok(())
}

/// Tests approving a comment that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let comment = repo.set_approved(999, true).await?;

    assert!(comment.is_none());

    Ok(())
}
