use super::*;

/// Tests that a vote is stored and the option counter is bumped.
///
/// Expected: vote_count 1 on the chosen option and the vote found for the identity
#[tokio::test]
async fn records_vote_and_increments_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, options) = create_poll_with_options(db, None).await?;

    let repo = PollRepository::new(db);
    assert!(repo.record_vote(poll.id, options[1].id, "hash-a").await?);

    let stored = repo.find_by_id(poll.id).await?.unwrap();
    assert_eq!(stored.options[0].vote_count, 0);
    assert_eq!(stored.options[1].vote_count, 1);

    assert_eq!(repo.find_vote(poll.id, "hash-a").await?, Some(options[1].id));
    assert_eq!(repo.find_vote(poll.id, "hash-b").await?, None);

    let votes = repo.find_votes(&[poll.id], "hash-a").await?;
    assert_eq!(votes.get(&poll.id), Some(&options[1].id));

    Ok(())
}

/// Tests a second vote from the same identity.
///
/// Expected: Ok(false), the first choice kept and no counter bumped
#[tokio::test]
async fn ignores_second_vote_from_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, options) = create_poll_with_options(db, None).await?;

    let repo = PollRepository::new(db);
    assert!(repo.record_vote(poll.id, options[0].id, "hash-a").await?);
    assert!(!repo.record_vote(poll.id, options[1].id, "hash-a").await?);

    let stored = repo.find_by_id(poll.id).await?.unwrap();
    assert_eq!(stored.options[0].vote_count, 1);
    assert_eq!(stored.options[1].vote_count, 0);
    assert_eq!(repo.find_vote(poll.id, "hash-a").await?, Some(options[0].id));

    Ok(())
}
