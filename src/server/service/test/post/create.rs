use super::*;

/// Tests creating a post without an explicit slug.
///
/// Expected: slug derived from the Vietnamese title, published_at set, tags deduplicated
#[tokio::test]
async fn generates_slug_from_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = PostService::new(db)
        .create(params("Đánh giá phim Mai"))
        .await?;

    assert_eq!(post.slug, "danh-gia-phim-mai");
    assert!(post.published_at.is_some());
    assert!(!post.excerpt.is_empty());
    assert_eq!(post.tags.len(), 2);

    Ok(())
}

/// Tests that a generated slug collision gets a numeric suffix.
///
/// Expected: second post slug ends with "-2"
#[tokio::test]
async fn suffixes_generated_slug_on_collision() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PostFactory::new(db).slug("bo-review").build().await?;

    let post = PostService::new(db).create(params("Bơ Review")).await?;

    assert_eq!(post.slug, "bo-review-2");

    Ok(())
}

/// Tests that an explicit slug already in use is rejected.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_explicit_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PostFactory::new(db).slug("trung-slug").build().await?;

    let result = PostService::new(db)
        .create(CreatePostParams {
            slug: Some("trung-slug".to_string()),
            ..params("Bài khác")
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a draft.
///
/// Expected: published_at stays empty
#[tokio::test]
async fn draft_has_no_publish_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = PostService::new(db)
        .create(CreatePostParams {
            published: false,
            ..params("Bản nháp")
        })
        .await?;

    assert!(post.published_at.is_none());

    Ok(())
}
