//! Player representation

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::MAX_HEALTH;

/// Seat index of a player (0 or 1)
///
/// The engine is strictly two-player, so the "other" player of a seat is
/// always well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Number of seats at the table
    pub const COUNT: usize = 2;

    /// Create a player ID from a seat index
    ///
    /// Returns None for indices outside the two seats.
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < Self::COUNT {
            Some(PlayerId(idx as u8))
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The opposing seat
    pub fn other(&self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats in fixed index order (0 then 1)
    pub fn all() -> [PlayerId; 2] {
        [PlayerId(0), PlayerId(1)]
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Per-player mutable record
///
/// Controllers only ever receive copies, never a reference into the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Health total. May drop below zero before the win check runs.
    pub health: i32,

    /// Victory points, never decreases during a match
    pub victory_points: u32,

    /// Is this player the arena occupant?
    pub in_arena: bool,
}

impl PlayerState {
    pub fn new(starting_health: i32) -> Self {
        PlayerState {
            health: starting_health,
            victory_points: 0,
            in_arena: false,
        }
    }

    /// Heal up to `max_health`, returning how much health was actually gained
    ///
    /// Healing does nothing while occupying the arena.
    pub fn heal(&mut self, amount: u32, max_health: i32) -> i32 {
        if self.in_arena {
            return 0;
        }
        let target = self.health.saturating_add(amount as i32).min(max_health);
        let healed = (target - self.health).max(0);
        self.health += healed;
        healed
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health -= amount as i32;
    }

    pub fn gain_victory_points(&mut self, amount: u32) {
        self.victory_points += amount;
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health <= 0
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::new(MAX_HEALTH)
    }
}
