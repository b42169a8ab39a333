//! Badge factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a badge with the given requirement.
///
/// # Arguments
/// - `db` - Database connection
/// - `requirement_type` - Requirement kind such as `posts_read` or `streak`
/// - `requirement_value` - Threshold that must be reached
/// - `xp_reward` - XP granted when the badge is earned
pub async fn create_badge(
    db: &DatabaseConnection,
    requirement_type: &str,
    requirement_value: i32,
    xp_reward: i32,
) -> Result<entity::badge::Model, DbErr> {
    let id = next_id();
    entity::badge::ActiveModel {
        slug: ActiveValue::Set(format!("badge-{}", id)),
        name: ActiveValue::Set(format!("Huy hiệu {}", id)),
        description: ActiveValue::Set("Huy hiệu kiểm thử".to_string()),
        icon: ActiveValue::Set("🏅".to_string()),
        requirement_type: ActiveValue::Set(requirement_type.to_string()),
        requirement_value: ActiveValue::Set(requirement_value),
        xp_reward: ActiveValue::Set(xp_reward),
        ..Default::default()
    }
    .insert(db)
    .await
}
