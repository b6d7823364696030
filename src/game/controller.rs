//! Player controller trait
//!
//! This module defines the interface between the turn engine and the
//! decision strategies (AI or scripted). The engine calls a controller when a
//! decision is needed and passes copies of the relevant player states, so a
//! controller can inspect but never modify the match.

use crate::core::{DieFace, KeepMask, PlayerState};

/// Decision strategy for one seat
///
/// Implement this trait to plug a new strategy into the engine. The engine
/// depends only on this trait, never on a concrete controller type.
pub trait PlayerController {
    /// Name used in logs, rendering and tournament tallies
    fn name(&self) -> &str;

    /// Choose which dice to keep before a reroll
    ///
    /// Called once per reroll round (`reroll_round` is 0 or 1 with default
    /// rules) on the active player's controller. Must return exactly one
    /// entry per die in `dice`, true to keep it. A mask of any other length
    /// aborts the match with `ArenaError::KeepMaskLength`.
    fn keep_dice(
        &mut self,
        me: PlayerState,
        opponent: PlayerState,
        dice: &[DieFace],
        reroll_round: u8,
    ) -> KeepMask;

    /// Decide whether to leave the arena to the attacker
    ///
    /// Only called on the occupant, after it has taken at least one damage.
    /// `me` already reflects that damage.
    fn yield_arena(&mut self, me: PlayerState, attacker: PlayerState, dice: &[DieFace]) -> bool;

    /// Called when the game ends (for cleanup/logging)
    fn on_game_end(&mut self, _me: PlayerState, _won: bool) {}
}
