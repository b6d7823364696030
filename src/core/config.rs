//! Rules configuration

use crate::{ArenaError, Result};
use serde::{Deserialize, Serialize};

/// Health every player starts with, and the healing cap
pub const MAX_HEALTH: i32 = 10;

/// Victory points needed to win
pub const VICTORY_POINTS_TO_WIN: u32 = 20;

/// Dice rolled each turn
pub const DIE_COUNT: usize = 6;

/// Reroll rounds after the initial roll
pub const REROLL_ROUNDS: u8 = 2;

/// Victory points for moving into an empty arena
pub const ARENA_ENTRY_BONUS: u32 = 1;

/// Victory points for starting a turn inside the arena
pub const ARENA_TURN_START_BONUS: u32 = 2;

/// Tunable rule parameters for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub max_health: i32,
    pub victory_points_to_win: u32,
    pub die_count: usize,
    pub reroll_rounds: u8,
}

impl RulesConfig {
    /// Reject configurations that cannot produce a playable match
    pub fn validate(&self) -> Result<()> {
        if self.max_health <= 0 {
            return Err(ArenaError::InvalidConfig(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        if self.victory_points_to_win == 0 {
            return Err(ArenaError::InvalidConfig(
                "victory_points_to_win must be positive".to_string(),
            ));
        }
        if self.die_count == 0 {
            return Err(ArenaError::InvalidConfig(
                "die_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            max_health: MAX_HEALTH,
            victory_points_to_win: VICTORY_POINTS_TO_WIN,
            die_count: DIE_COUNT,
            reroll_rounds: REROLL_ROUNDS,
        }
    }
}
