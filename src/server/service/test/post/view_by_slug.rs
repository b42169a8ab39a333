use super::*;

/// Tests that viewing a published post counts the view.
///
/// Expected: view_count increases with each view
#[tokio::test]
async fn counts_views() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = PostFactory::new(db).slug("xem-nhieu").build().await?;
    let service = PostService::new(db);

    service.view_by_slug("xem-nhieu").await?;
    let viewed = service.view_by_slug("xem-nhieu").await?;

    assert_eq!(viewed.id, post.id);
    assert_eq!(viewed.view_count, 2);

    Ok(())
}

/// Tests that drafts are hidden from readers.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_drafts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = create_draft(db).await?;

    let result = PostService::new(db).view_by_slug(&draft.slug).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
