use super::*;

/// Tests related posts come from the same category and exclude the post itself.
///
/// Expected: Ok with the other published post of the category only
#[tokio::test]
async fn returns_same_category_excluding_self() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let main = PostFactory::new(db).category("sach").build().await?;
    let sibling = PostFactory::new(db).category("sach").build().await?;
    PostFactory::new(db).category("sach").published(false).build().await?;
    PostFactory::new(db).category("phim").build().await?;

    let repo = PostRepository::new(db);
    let post = repo.find_by_id(main.id).await?.unwrap();
    let related = repo.get_related(&post, 3).await?;

    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, sibling.id);

    Ok(())
}
