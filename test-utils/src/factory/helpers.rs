//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a poll with two options ("Có" and "Không").
///
/// # Arguments
/// - `db` - Database connection
/// - `post_id` - Optional post the poll is attached to
///
/// # Returns
/// - `Ok((poll, options))` - Created poll and its options ordered by position
/// - `Err(DbErr)` - Database error during creation
pub async fn create_poll_with_options(
    db: &DatabaseConnection,
    post_id: Option<i32>,
) -> Result<(entity::poll::Model, Vec<entity::poll_option::Model>), DbErr> {
    let poll = crate::factory::poll::PollFactory::new(db)
        .post_id(post_id)
        .build()
        .await?;

    let yes = crate::factory::poll::create_option(db, poll.id, "Có", 0).await?;
    let no = crate::factory::poll::create_option(db, poll.id, "Không", 1).await?;

    Ok((poll, vec![yes, no]))
}

/// Creates a published post and a visitor profile.
///
/// Useful for gamification tests that record reads of a post.
pub async fn create_post_and_visitor(
    db: &DatabaseConnection,
) -> Result<(entity::post::Model, entity::visitor_profile::Model), DbErr> {
    let post = crate::factory::post::create_post(db).await?;
    let visitor = crate::factory::visitor::create_visitor(db).await?;

    Ok((post, visitor))
}
