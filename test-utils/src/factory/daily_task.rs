//! Daily task factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active daily task for the given action type.
///
/// # Arguments
/// - `db` - Database connection
/// - `action_type` - Action that advances the task, e.g. `read_post`
/// - `target` - Number of actions needed to complete the task
/// - `xp_reward` - XP granted when the task is claimed
pub async fn create_task(
    db: &DatabaseConnection,
    action_type: &str,
    target: i32,
    xp_reward: i32,
) -> Result<entity::daily_task::Model, DbErr> {
    let id = next_id();
    entity::daily_task::ActiveModel {
        slug: ActiveValue::Set(format!("task-{}", id)),
        title: ActiveValue::Set(format!("Nhiệm vụ {}", id)),
        description: ActiveValue::Set("Nhiệm vụ kiểm thử".to_string()),
        action_type: ActiveValue::Set(action_type.to_string()),
        target: ActiveValue::Set(target),
        xp_reward: ActiveValue::Set(xp_reward),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
