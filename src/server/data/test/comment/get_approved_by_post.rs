use super::*;

/// Tests that only approved comments of the requested post are listed.
///
/// Expected: Ok with the approved comment of the post only
#[tokio::test]
async fn lists_only_approved_comments_of_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let other = create_post(db).await?;
    let approved = CommentFactory::new(db, post.id).build().await?;
    CommentFactory::new(db, post.id).approved(false).build().await?;
    CommentFactory::new(db, other.id).build().await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_approved_by_post(post.id).await?;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, approved.id);

    Ok(())
}

/// Tests ordering of approved comments.
///
/// Expected: Ok with the oldest comment first
#[tokio::test]
async fn orders_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let first = CommentFactory::new(db, post.id).content("Thứ nhất").build().await?;
    let second = CommentFactory::new(db, post.id).content("Thứ hai").build().await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_approved_by_post(post.id).await?;

    assert_eq!(comments[0].id, first.id);
    assert_eq!(comments[1].id, second.id);

    Ok(())
}
