//! Heuristic AI controller
//!
//! Rule-of-thumb strategy: chase numeral sets that are already started,
//! keep attacks when they can hurt someone, keep hearts when hurt and able
//! to heal, and give up the arena once health runs low.

use crate::core::{count_face, DieFace, KeepMask, PlayerState, MAX_HEALTH};
use crate::game::controller::PlayerController;

/// Health at or below which the controller leaves the arena
const DEFAULT_YIELD_THRESHOLD: i32 = 5;

/// Heuristic controller with a tunable arena yield threshold
///
/// Assumes the default health cap unless told otherwise with
/// [`HeuristicController::with_max_health`].
#[derive(Debug, Clone)]
pub struct HeuristicController {
    yield_threshold: i32,
    max_health: i32,
}

impl HeuristicController {
    pub fn new() -> Self {
        HeuristicController {
            yield_threshold: DEFAULT_YIELD_THRESHOLD,
            max_health: MAX_HEALTH,
        }
    }

    /// Use the health cap of the match's rules when judging hearts
    pub fn with_max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Set the health at or below which the arena is yielded
    pub fn with_yield_threshold(mut self, threshold: i32) -> Self {
        self.yield_threshold = threshold;
        self
    }

    fn keep_face(
        &self,
        face: DieFace,
        me: &PlayerState,
        opponent: &PlayerState,
        dice: &[DieFace],
    ) -> bool {
        match face {
            // Attacks only matter when someone is in the arena to take damage
            DieFace::Attack => me.in_arena || opponent.in_arena,
            DieFace::Heal => !me.in_arena && me.health < self.max_health,
            DieFace::One | DieFace::Two | DieFace::Three => count_face(dice, face) >= 2,
        }
    }
}

impl Default for HeuristicController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController for HeuristicController {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn keep_dice(
        &mut self,
        me: PlayerState,
        opponent: PlayerState,
        dice: &[DieFace],
        _reroll_round: u8,
    ) -> KeepMask {
        dice.iter()
            .map(|&face| self.keep_face(face, &me, &opponent, dice))
            .collect()
    }

    fn yield_arena(&mut self, me: PlayerState, _attacker: PlayerState, _dice: &[DieFace]) -> bool {
        me.health <= self.yield_threshold
    }
}
