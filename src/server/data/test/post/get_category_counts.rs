use super::*;

/// Tests category counts only include published posts.
///
/// Expected: Ok with counts ordered by category name
#[tokio::test]
async fn counts_published_posts_per_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PostFactory::new(db).category("phim").build().await?;
    PostFactory::new(db).category("phim").build().await?;
    PostFactory::new(db).category("am-nhac").build().await?;
    PostFactory::new(db).category("am-nhac").published(false).build().await?;

    let repo = PostRepository::new(db);
    let counts = repo.get_category_counts().await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].category, "am-nhac");
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[1].category, "phim");
    assert_eq!(counts[1].count, 2);

    Ok(())
}
