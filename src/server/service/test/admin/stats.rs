use super::*;

/// Tests the dashboard counters on an empty database.
///
/// Expected: every counter is zero
#[tokio::test]
async fn empty_database_counts_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = StatsService::new(db).get().await?;

    assert_eq!(stats.posts_published, 0);
    assert_eq!(stats.total_views, 0);
    assert_eq!(stats.comments_total, 0);
    assert_eq!(stats.visitors, 0);
    assert_eq!(stats.active_bans, 0);

    Ok(())
}

/// Tests the dashboard counters after activity across the site.
///
/// Expected: each counter matches the rows created, expired bans and unsubscribed
/// or read entries excluded
#[tokio::test]
async fn counts_site_activity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let post = PostFactory::new(db).slug("thong-ke").build().await?;
    create_draft(db).await?;
    PostService::new(db).view_by_slug("thong-ke").await?;
    PostService::new(db).view_by_slug("thong-ke").await?;

    CommentFactory::new(db, post.id).build().await?;
    CommentFactory::new(db, post.id).approved(false).build().await?;

    let reactions = ReactionService::new(db);
    reactions.toggle(post.id, "iphash-a", "love", None).await?;
    reactions.toggle(post.id, "iphash-b", "love", None).await?;

    let (poll, options) = create_poll_with_options(db, None).await?;
    PollService::new(db)
        .vote(poll.id, options[0].id, "iphash-a", None, now)
        .await?;

    let newsletter = NewsletterService::new(db);
    newsletter.subscribe("a@doc.vn").await?;
    newsletter.subscribe("b@doc.vn").await?;
    newsletter.unsubscribe("b@doc.vn").await?;

    let contact = ContactService::new(db);
    let read = contact
        .submit(CreateContactParams {
            name: "Minh".to_string(),
            email: "minh@mail.vn".to_string(),
            subject: "Góp ý".to_string(),
            message: "Đã đọc".to_string(),
            ip_hash: "iphash-a".to_string(),
        })
        .await?;
    contact.set_read(read.id, true).await?;
    contact
        .submit(CreateContactParams {
            name: "Lan".to_string(),
            email: "lan@mail.vn".to_string(),
            subject: "Hỏi".to_string(),
            message: "Chưa đọc".to_string(),
            ip_hash: "iphash-b".to_string(),
        })
        .await?;

    create_visitor(db).await?;

    let security = SecurityService::new(db);
    security
        .ban(
            CreateBanParams {
                ip_hash: "iphash-spam".to_string(),
                reason: "Spam".to_string(),
                duration: None,
            },
            now,
        )
        .await?;
    security
        .ban(
            CreateBanParams {
                ip_hash: "iphash-old".to_string(),
                reason: "Cũ".to_string(),
                duration: Some(Duration::hours(1)),
            },
            now - Duration::hours(2),
        )
        .await?;

    let stats = StatsService::new(db).get().await?;

    assert_eq!(stats.posts_published, 1);
    assert_eq!(stats.posts_draft, 1);
    assert_eq!(stats.total_views, 2);
    assert_eq!(stats.comments_total, 2);
    assert_eq!(stats.comments_pending, 1);
    assert_eq!(stats.reactions, 2);
    assert_eq!(stats.poll_votes, 1);
    assert_eq!(stats.subscribers_active, 1);
    assert_eq!(stats.contacts_unread, 1);
    assert_eq!(stats.visitors, 1);
    assert_eq!(stats.active_bans, 1);

    Ok(())
}
