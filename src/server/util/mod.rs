//! Small pure helpers shared by services and controllers.

pub mod hash;
pub mod markdown;
pub mod parse;
pub mod sanitize;
pub mod slug;
