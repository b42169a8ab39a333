//! Reaction domain models.

use crate::model::reaction::{ReactionCountDto, ReactionSummaryDto, ToggleReactionResultDto};

/// Per-type counts for a post plus the caller's own reactions.
#[derive(Debug, Clone)]
pub struct ReactionSummary {
    pub post_id: i32,
    /// Counts ordered by reaction type name; types with zero reactions are omitted.
    pub counts: Vec<(String, u64)>,
    pub active: Vec<String>,
}

impl ReactionSummary {
    pub fn count_of(&self, reaction_type: &str) -> u64 {
        self.counts
            .iter()
            .find(|(kind, _)| kind == reaction_type)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn into_dto(self) -> ReactionSummaryDto {
        let total = self.counts.iter().map(|(_, count)| count).sum();

        ReactionSummaryDto {
            post_id: self.post_id,
            counts: self
                .counts
                .into_iter()
                .map(|(reaction_type, count)| ReactionCountDto {
                    reaction_type,
                    count,
                })
                .collect(),
            total,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub reaction_type: String,
    pub added: bool,
    pub summary: ReactionSummary,
}

impl ToggleOutcome {
    pub fn into_dto(self) -> ToggleReactionResultDto {
        ToggleReactionResultDto {
            reaction_type: self.reaction_type,
            added: self.added,
            summary: self.summary.into_dto(),
        }
    }
}
