use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::validate_reaction_type;

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct ToggleReactionDto {
    #[validate(range(min = 1, message = "Bài viết không hợp lệ"))]
    pub post_id: i32,
    #[validate(custom(function = "validate_reaction_type"))]
    pub reaction_type: String,
    pub visitor_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ReactionCountDto {
    pub reaction_type: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ReactionSummaryDto {
    pub post_id: i32,
    pub counts: Vec<ReactionCountDto>,
    pub total: u64,
    /// Reaction types the caller currently has on the post.
    pub active: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ToggleReactionResultDto {
    pub reaction_type: String,
    /// `true` when the reaction was added, `false` when removed.
    pub added: bool,
    pub summary: ReactionSummaryDto,
}
