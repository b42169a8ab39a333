//! Static level curve.

use crate::server::model::gamification::LevelProgress;

/// One step of the level curve.
#[derive(Debug, Clone, Copy)]
pub struct LevelTier {
    pub level: i32,
    pub min_xp: i32,
    pub title: &'static str,
}

/// Level thresholds in ascending order.
pub const LEVELS: [LevelTier; 10] = [
    LevelTier {
        level: 1,
        min_xp: 0,
        title: "Người mới",
    },
    LevelTier {
        level: 2,
        min_xp: 100,
        title: "Độc giả",
    },
    LevelTier {
        level: 3,
        min_xp: 300,
        title: "Độc giả thân thiết",
    },
    LevelTier {
        level: 4,
        min_xp: 600,
        title: "Người bình luận",
    },
    LevelTier {
        level: 5,
        min_xp: 1000,
        title: "Người đóng góp",
    },
    LevelTier {
        level: 6,
        min_xp: 1500,
        title: "Chuyên gia nhỏ",
    },
    LevelTier {
        level: 7,
        min_xp: 2200,
        title: "Chuyên gia",
    },
    LevelTier {
        level: 8,
        min_xp: 3000,
        title: "Bậc thầy",
    },
    LevelTier {
        level: 9,
        min_xp: 4000,
        title: "Huyền thoại",
    },
    LevelTier {
        level: 10,
        min_xp: 5500,
        title: "Bơ Master",
    },
];

fn tier_for_xp(xp: i32) -> usize {
    LEVELS
        .iter()
        .rposition(|tier| xp >= tier.min_xp)
        .unwrap_or(0)
}

/// Highest level whose threshold is at or below `xp`. Negative XP is level 1.
pub fn level_for_xp(xp: i32) -> i32 {
    LEVELS[tier_for_xp(xp)].level
}

/// Title of a level, clamped to the ends of the curve.
pub fn title_for_level(level: i32) -> &'static str {
    let index = (level.clamp(1, LEVELS.len() as i32) - 1) as usize;
    LEVELS[index].title
}

/// Position of `xp` within its level and distance to the next one.
///
/// At the top level `xp_to_next_level` is 0 and `percent` is 100.
pub fn level_progress(xp: i32) -> LevelProgress {
    let xp = xp.max(0);
    let index = tier_for_xp(xp);
    let current = LEVELS[index];
    let xp_into_level = xp - current.min_xp;

    match LEVELS.get(index + 1) {
        Some(next) => {
            let span = next.min_xp - current.min_xp;
            LevelProgress {
                level: current.level,
                title: current.title,
                xp,
                xp_into_level,
                xp_to_next_level: next.min_xp - xp,
                percent: ((xp_into_level as i64 * 100) / span as i64) as u32,
                next_title: Some(next.title),
            }
        }
        None => LevelProgress {
            level: current.level,
            title: current.title,
            xp,
            xp_into_level,
            xp_to_next_level: 0,
            percent: 100,
            next_title: None,
        },
    }
}
