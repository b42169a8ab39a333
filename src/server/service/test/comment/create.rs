use super::*;

/// Tests that comment text is sanitized and the email lowercased.
///
/// Expected: HTML escaped in content and name, email lowercased, approved
#[tokio::test]
async fn sanitizes_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;

    let comment = CommentService::new(db)
        .create(
            CreateCommentParams {
                author_name: "  <b>Lan</b> ".to_string(),
                author_email: Some("Lan@Example.VN".to_string()),
                content: "<script>alert(1)</script>".to_string(),
                ..params(post.id)
            },
            false,
        )
        .await?;

    assert_eq!(comment.author_name, "&lt;b&gt;Lan&lt;&#x2F;b&gt;");
    assert_eq!(comment.author_email.as_deref(), Some("lan@example.vn"));
    assert!(!comment.content.contains('<'));
    assert!(comment.approved);

    Ok(())
}

/// Tests moderation mode.
///
/// Expected: comment stored unapproved and hidden from the public list
#[tokio::test]
async fn pending_when_approval_required() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let service = CommentService::new(db);

    let comment = service.create(params(post.id), true).await?;

    assert!(!comment.approved);
    assert!(service.list_for_post(post.id).await?.is_empty());

    Ok(())
}

/// Tests replying with a parent from another post.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_parent_from_other_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let other = create_post(db).await?;
    let foreign = create_comment(db, other.id).await?;

    let result = CommentService::new(db)
        .create(
            CreateCommentParams {
                parent_id: Some(foreign.id),
                ..params(post.id)
            },
            false,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests commenting on a draft.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unpublished_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = create_draft(db).await?;

    let result = CommentService::new(db).create(params(draft.id), false).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a comment with a visitor id credits the visitor.
///
/// Expected: comments counter incremented and comment XP granted
#[tokio::test]
async fn credits_visitor_activity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let visitor = create_visitor(db).await?;

    CommentService::new(db)
        .create(
            CreateCommentParams {
                visitor_id: Some(format!(" {} ", visitor.visitor_id)),
                ..params(post.id)
            },
            false,
        )
        .await?;

    let profile = VisitorRepository::new(db)
        .find(&visitor.visitor_id)
        .await?
        .unwrap();
    assert_eq!(profile.comments_count, 1);
    assert_eq!(profile.xp, 15);

    Ok(())
}

/// Tests a comment whose text is only control characters.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_text_blank_after_cleaning() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let service = CommentService::new(db);

    let result = service
        .create(
            CreateCommentParams {
                content: "\u{0001}\u{0002}\u{0003}".to_string(),
                ..params(post.id)
            },
            false,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}
