use super::*;

/// Tests filtering polls by post.
///
/// Expected: Ok with only the poll attached to the post
#[tokio::test]
async fn filters_by_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let (attached, _) = create_poll_with_options(db, Some(post.id)).await?;
    create_poll_with_options(db, None).await?;

    let repo = PollRepository::new(db);

    let for_post = repo.get_all(Some(post.id)).await?;
    assert_eq!(for_post.len(), 1);
    assert_eq!(for_post[0].id, attached.id);
    assert_eq!(for_post[0].options.len(), 2);

    let all = repo.get_all(None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
