use super::*;

/// Tests creating a poll with options.
///
/// Verifies the options are stored in the given order with zero votes.
///
/// Expected: Ok with active poll and options at positions 0..n
#[tokio::test]
async fn creates_poll_with_ordered_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PollRepository::new(db);
    let poll = repo
        .create(CreatePollParams {
            post_id: None,
            question: "Bạn thích mùa nào nhất?".to_string(),
            options: vec!["Xuân".to_string(), "Hạ".to_string(), "Thu".to_string()],
            ends_at: None,
        })
        .await?;

    assert!(poll.active);
    let texts: Vec<&str> = poll.options.iter().map(|o| o.text.as_str()).collect();
    assert_eq!(texts, vec!["Xuân", "Hạ", "Thu"]);
    assert_eq!(poll.options[2].position, 2);
    assert_eq!(poll.total_votes(), 0);

    let stored = repo.find_by_id(poll.id).await?.unwrap();
    assert_eq!(stored.options.len(), 3);

    Ok(())
}
