use super::*;

/// Tests toggling the same reaction twice.
///
/// Expected: first call adds, second removes, summary follows
#[tokio::test]
async fn toggles_on_and_off() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let service = ReactionService::new(db);

    let added = service.toggle(post.id, "iphash-a", "love", None).await?;
    assert!(added.added);
    assert_eq!(added.summary.active, vec!["love".to_string()]);
    assert_eq!(added.summary.count_of("love"), 1);

    let removed = service.toggle(post.id, "iphash-a", "love", None).await?;
    assert!(!removed.added);
    assert!(removed.summary.active.is_empty());
    assert_eq!(removed.summary.count_of("love"), 0);

    Ok(())
}

/// Tests that only adding a reaction grants XP.
///
/// Expected: reaction XP granted once across add and remove
#[tokio::test]
async fn credits_visitor_only_on_add() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = create_post(db).await?;
    let visitor = create_visitor(db).await?;
    let service = ReactionService::new(db);

    service
        .toggle(post.id, "iphash-a", "wow", Some(&visitor.visitor_id))
        .await?;
    service
        .toggle(post.id, "iphash-a", "wow", Some(&visitor.visitor_id))
        .await?;

    let profile = crate::server::data::visitor::VisitorRepository::new(db)
        .find(&visitor.visitor_id)
        .await?
        .unwrap();
    assert_eq!(profile.reactions_count, 1);
    assert_eq!(profile.xp, 2);

    Ok(())
}
