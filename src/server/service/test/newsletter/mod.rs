use crate::server::{error::AppError, service::newsletter::NewsletterService};
use entity::prelude::NewsletterSubscriber;
use test_utils::builder::TestBuilder;

mod subscribe;
