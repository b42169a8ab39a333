//! Custom validator functions used by DTO derives.

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

pub const REACTION_TYPES: [&str; 6] = ["like", "love", "haha", "wow", "sad", "angry"];

pub const BADGE_REQUIREMENTS: [&str; 7] = [
    "posts_read",
    "comments",
    "reactions",
    "votes",
    "streak",
    "level",
    "xp",
];

pub const TASK_ACTIONS: [&str; 5] = ["read_post", "comment", "reaction", "poll_vote", "check_in"];

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub fn validate_reaction_type(value: &str) -> Result<(), ValidationError> {
    if REACTION_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(error("reaction_type", "Loại cảm xúc không hợp lệ"))
    }
}

pub fn validate_requirement_type(value: &str) -> Result<(), ValidationError> {
    if BADGE_REQUIREMENTS.contains(&value) {
        Ok(())
    } else {
        Err(error("requirement_type", "Loại điều kiện không hợp lệ"))
    }
}

pub fn validate_action_type(value: &str) -> Result<(), ValidationError> {
    if TASK_ACTIONS.contains(&value) {
        Ok(())
    } else {
        Err(error("action_type", "Loại hành động không hợp lệ"))
    }
}

/// Slugs are lowercase ASCII letters, digits and single dashes.
pub fn validate_slug(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--");

    if valid {
        Ok(())
    } else {
        Err(error("slug", "Slug chỉ gồm chữ thường, số và dấu gạch ngang"))
    }
}

pub fn validate_poll_options(options: &[String]) -> Result<(), ValidationError> {
    if options.len() < 2 || options.len() > 10 {
        return Err(error("options", "Bình chọn cần từ 2 đến 10 lựa chọn"));
    }

    let all_valid = options.iter().all(|option| {
        let len = option.trim().chars().count();
        (1..=200).contains(&len)
    });

    if all_valid {
        Ok(())
    } else {
        Err(error("options", "Mỗi lựa chọn dài từ 1 đến 200 ký tự"))
    }
}

/// Deserializes a string with surrounding whitespace removed, so length rules apply
/// to the text that is stored.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Like [`trimmed`] for optional fields. A blank value stays `Some("")` so length
/// rules still reject it.
pub fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()))
}
