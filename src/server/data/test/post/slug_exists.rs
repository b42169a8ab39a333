use super::*;

/// Tests slug lookup for an existing post.
///
/// Expected: true for the taken slug, false for a free one
#[tokio::test]
async fn detects_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PostFactory::new(db).slug("da-co").build().await?;

    let repo = PostRepository::new(db);
    assert!(repo.slug_exists("da-co", None).await?);
    assert!(!repo.slug_exists("chua-co", None).await?);

    Ok(())
}

/// Tests that a post's own slug is ignored when excluded.
///
/// Expected: false when the only match is the excluded post
#[tokio::test]
async fn ignores_excluded_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = PostFactory::new(db).slug("cua-toi").build().await?;

    let repo = PostRepository::new(db);
    assert!(!repo.slug_exists("cua-toi", Some(post.id)).await?);

    Ok(())
}
