use super::*;

/// Tests that drafts never appear in the public listing.
///
/// Expected: Ok with only published posts counted
#[tokio::test]
async fn excludes_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_post(db).await?;
    create_post(db).await?;
    create_draft(db).await?;

    let repo = PostRepository::new(db);
    let (posts, total) = repo
        .get_published_paginated(&PostFilter::default(), 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.published));

    Ok(())
}

/// Tests filtering by category and tag together.
///
/// Expected: Ok with only the post matching both filters
#[tokio::test]
async fn filters_by_category_and_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = PostFactory::new(db)
        .category("am-thuc")
        .tags("pho,ha-noi")
        .build()
        .await?;
    PostFactory::new(db)
        .category("am-thuc")
        .tags("bun-bo")
        .build()
        .await?;
    PostFactory::new(db)
        .category("du-lich")
        .tags("pho")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let filter = PostFilter {
        category: Some("am-thuc".to_string()),
        tag: Some("pho".to_string()),
        search: None,
    };
    let (posts, total) = repo.get_published_paginated(&filter, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(posts[0].id, wanted.id);

    Ok(())
}

/// Tests searching in the title.
///
/// Expected: Ok with the post whose title contains the search text
#[tokio::test]
async fn searches_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PostFactory::new(db).title("Review máy ảnh Fuji").build().await?;
    PostFactory::new(db).title("Ăn gì ở Đà Lạt").build().await?;

    let repo = PostRepository::new(db);
    let filter = PostFilter {
        search: Some("Fuji".to_string()),
        ..Default::default()
    };
    let (posts, total) = repo.get_published_paginated(&filter, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(posts[0].title, "Review máy ảnh Fuji");

    Ok(())
}

/// Tests pagination over the listing.
///
/// Expected: Ok with a partial second page and the full total
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        create_post(db).await?;
    }

    let repo = PostRepository::new(db);
    let (posts, total) = repo
        .get_published_paginated(&PostFilter::default(), 1, 3)
        .await?;

    assert_eq!(total, 5);
    assert_eq!(posts.len(), 2);

    Ok(())
}
