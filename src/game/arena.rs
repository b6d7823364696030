//! Arena occupancy state machine
//!
//! Occupancy changes only during attack resolution:
//!
//! - `Empty`: the attacker moves in and scores the entry bonus, no damage.
//! - `OccupiedBy(attacker)`: the other player takes one damage per attack.
//! - `OccupiedBy(defender)`: the occupant takes the damage and, if it was hit
//!   at all, decides whether to yield the arena to the attacker.

use crate::core::{count_face, DieFace, PlayerId, PlayerState, ARENA_ENTRY_BONUS};
use crate::game::controller::PlayerController;
use crate::game::GameState;
use serde::{Deserialize, Serialize};

/// Who holds the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaState {
    Empty,
    OccupiedBy(PlayerId),
}

impl ArenaState {
    pub fn from_players(players: &[PlayerState; 2]) -> Self {
        debug_assert!(
            !(players[0].in_arena && players[1].in_arena),
            "both players occupy the arena"
        );
        PlayerId::all()
            .into_iter()
            .find(|id| players[id.index()].in_arena)
            .map_or(ArenaState::Empty, ArenaState::OccupiedBy)
    }

    pub fn occupant(&self) -> Option<PlayerId> {
        match self {
            ArenaState::Empty => None,
            ArenaState::OccupiedBy(id) => Some(*id),
        }
    }
}

/// What the attack dice did this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaOutcome {
    /// The active player took the empty arena
    Entered,
    /// The occupant attacked the other player
    Retained { damage: u32 },
    /// The active player attacked the occupant
    Contested { damage: u32, yielded: bool },
}

/// Resolve the attack dice of the active player
///
/// `defender` is the controller of the non-active player; it is only asked
/// to yield when it occupies the arena and took at least one damage. Taking
/// the arena through a yield awards no victory points.
pub fn resolve_attack(
    game: &mut GameState,
    dice: &[DieFace],
    defender: &mut dyn PlayerController,
) -> ArenaOutcome {
    let attacker = game.active_player;
    let target = attacker.other();
    let damage = count_face(dice, DieFace::Attack) as u32;

    match game.arena() {
        ArenaState::OccupiedBy(occupant) if occupant == attacker => {
            game.player_mut(target).take_damage(damage);
            ArenaOutcome::Retained { damage }
        }
        ArenaState::OccupiedBy(_) => {
            game.player_mut(target).take_damage(damage);
            let yielded = damage > 0
                && defender.yield_arena(*game.player(target), *game.player(attacker), dice);
            if yielded {
                game.player_mut(target).in_arena = false;
                game.player_mut(attacker).in_arena = true;
            }
            ArenaOutcome::Contested { damage, yielded }
        }
        ArenaState::Empty => {
            let player = game.player_mut(attacker);
            player.in_arena = true;
            player.gain_victory_points(ARENA_ENTRY_BONUS);
            ArenaOutcome::Entered
        }
    }
}
