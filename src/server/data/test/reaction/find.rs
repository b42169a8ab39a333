use super::*;

/// Tests that a reaction is found only for the same post, identity and type.
///
/// Expected: Some for the exact triple, None for another type or identity
#[tokio::test]
async fn matches_post_identity_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;

    let repo = ReactionRepository::new(db);
    repo.create(post.id, "hash-a", "love").await?;

    assert!(repo.find(post.id, "hash-a", "love").await?.is_some());
    assert!(repo.find(post.id, "hash-a", "haha").await?.is_none());
    assert!(repo.find(post.id, "hash-b", "love").await?.is_none());

    Ok(())
}

/// Tests that deleting the found reaction removes it.
///
/// Expected: None after delete
#[tokio::test]
async fn delete_removes_reaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;

    let repo = ReactionRepository::new(db);
    repo.create(post.id, "hash-a", "wow").await?;
    let existing = repo.find(post.id, "hash-a", "wow").await?.unwrap();
    repo.delete(existing.id).await?;

    assert!(repo.find(post.id, "hash-a", "wow").await?.is_none());

    Ok(())
}

/// Tests storing the same reaction twice.
///
/// Expected: true then false, with a single row counted
#[tokio::test]
async fn create_skips_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;

    let repo = ReactionRepository::new(db);
    assert!(repo.create(post.id, "hash-a", "love").await?);
    assert!(!repo.create(post.id, "hash-a", "love").await?);

    assert_eq!(repo.count_by_type(post.id).await?, vec![("love".to_string(), 1)]);

    Ok(())
}
