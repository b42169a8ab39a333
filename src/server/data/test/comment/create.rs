use super::*;

/// Tests creating a reply to an existing comment.
///
/// Expected: Ok with parent id and approval flag stored as given
#[tokio::test]
async fn creates_reply_with_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let parent = CommentFactory::new(db, post.id).build().await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(
            CreateCommentParams {
                post_id: post.id,
                parent_id: Some(parent.id),
                visitor_id: None,
                author_name: "Lan".to_string(),
                author_email: None,
                content: "Đồng ý với bạn".to_string(),
                ip_hash: "hash-a".to_string(),
            },
            false,
        )
        .await?;

    assert_eq!(comment.parent_id, Some(parent.id));
    assert_eq!(comment.post_id, post.id);
    assert!(!comment.approved);

    Ok(())
}
