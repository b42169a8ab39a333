//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert into
//! the database; parents must already exist (see `helpers` for common hierarchies).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let post = factory::post::create_post(&db).await?;
//!     let visitor = factory::visitor::create_visitor(&db).await?;
//!
//!     let (poll, options) = factory::helpers::create_poll_with_options(&db, Some(post.id)).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let draft = factory::post::PostFactory::new(&db)
//!     .title("Bản nháp")
//!     .published(false)
//!     .build()
//!     .await?;
//! ```

pub mod admin_user;
pub mod badge;
pub mod comment;
pub mod daily_task;
pub mod helpers;
pub mod poll;
pub mod post;
pub mod visitor;
