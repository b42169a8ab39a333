use super::*;

/// Tests a first vote.
///
/// Expected: option count incremented and the vote visible for that ip hash
#[tokio::test]
async fn records_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, options) = create_poll_with_options(db, None).await?;
    let service = PollService::new(db);

    let updated = service
        .vote(poll.id, options[0].id, "iphash-a", None, Utc::now())
        .await?;

    assert_eq!(updated.options[0].vote_count, 1);
    assert_eq!(updated.options[1].vote_count, 0);

    let (_, voted) = service.get(poll.id, "iphash-a").await?;
    assert_eq!(voted, Some(options[0].id));

    Ok(())
}

/// Tests voting twice from the same identity.
///
/// Expected: Err(AppError::Conflict) and counts unchanged
#[tokio::test]
async fn rejects_second_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, options) = create_poll_with_options(db, None).await?;
    let service = PollService::new(db);

    service
        .vote(poll.id, options[0].id, "iphash-a", None, Utc::now())
        .await?;
    let result = service
        .vote(poll.id, options[1].id, "iphash-a", None, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let (poll, _) = service.get(poll.id, "iphash-a").await?;
    assert_eq!(poll.options[1].vote_count, 0);

    Ok(())
}

/// Tests voting on an ended poll.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_ended_poll() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let poll = PollFactory::new(db)
        .ends_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let option = create_option(db, poll.id, "Có", 0).await?;

    let result = PollService::new(db)
        .vote(poll.id, option.id, "iphash-a", None, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests voting on a poll an admin has closed.
///
/// Expected: Err(AppError::BadRequest) and no vote counted
#[tokio::test]
async fn rejects_closed_poll() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let poll = PollFactory::new(db).active(false).build().await?;
    let option = create_option(db, poll.id, "Có", 0).await?;
    let service = PollService::new(db);

    let result = service
        .vote(poll.id, option.id, "iphash-a", None, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let (poll, voted) = service.get(poll.id, "iphash-a").await?;
    assert_eq!(poll.options[0].vote_count, 0);
    assert!(voted.is_none());

    Ok(())
}

/// Tests two simultaneous votes from the same identity.
///
/// Expected: one vote counted, the other Err(AppError::Conflict)
#[tokio::test]
async fn concurrent_duplicate_vote_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, options) = create_poll_with_options(db, None).await?;
    let service = PollService::new(db);
    let now = Utc::now();

    let (first, second) = tokio::join!(
        service.vote(poll.id, options[0].id, "iphash-a", None, now),
        service.vote(poll.id, options[1].id, "iphash-a", None, now),
    );

    let conflicts = [&first, &second]
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();
    assert_eq!(conflicts, 1);
    assert!(first.is_ok() || second.is_ok());

    let (poll, _) = service.get(poll.id, "iphash-a").await?;
    let total: i32 = poll.options.iter().map(|o| o.vote_count).sum();
    assert_eq!(total, 1);

    Ok(())
}

/// Tests voting with an option of a different poll.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_foreign_option() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, _) = create_poll_with_options(db, None).await?;
    let (_, other_options) = create_poll_with_options(db, None).await?;

    let result = PollService::new(db)
        .vote(poll.id, other_options[0].id, "iphash-a", None, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a vote credits the visitor.
///
/// Expected: votes counter 1 and poll vote XP granted
#[tokio::test]
async fn credits_visitor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, options) = create_poll_with_options(db, None).await?;
    let visitor = create_visitor(db).await?;

    PollService::new(db)
        .vote(
            poll.id,
            options[0].id,
            "iphash-a",
            Some(&visitor.visitor_id),
            Utc::now(),
        )
        .await?;

    let profile = crate::server::data::visitor::VisitorRepository::new(db)
        .find(&visitor.visitor_id)
        .await?
        .unwrap();
    assert_eq!(profile.votes_count, 1);
    assert_eq!(profile.xp, 5);

    Ok(())
}
