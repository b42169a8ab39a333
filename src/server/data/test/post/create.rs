use super::*;

/// Tests creating a published post.
///
/// Verifies that the stored row carries the resolved slug, split tags and
/// publication timestamp.
///
/// Expected: Ok with tags split and published_at set
#[tokio::test]
async fn creates_published_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let post = repo.create(record("danh-gia-tai-nghe", true)).await?;

    assert_eq!(post.slug, "danh-gia-tai-nghe");
    assert_eq!(post.tags, vec!["am-thanh", "tai-nghe"]);
    assert_eq!(post.view_count, 0);
    assert!(post.published_at.is_some());

    Ok(())
}

/// Tests creating a draft.
///
/// Expected: Ok with published false and no published_at
#[tokio::test]
async fn creates_draft_without_published_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let post = repo.create(record("ban-nhap", false)).await?;

    assert!(!post.published);
    assert!(post.published_at.is_none());

    Ok(())
}
