//! Read-only game snapshots for renderers
//!
//! A snapshot is a detached copy of the parts of the game a display needs:
//! both players, the dice of the turn in progress, whose turn it is and the
//! turn counter. Snapshots serialize to JSON and render as a text board.

use crate::core::{Dice, PlayerId, PlayerState};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Detached view of a match at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Both players, indexed by seat
    pub players: [PlayerState; 2],

    pub player_names: [String; 2],

    /// Dice of the turn in progress, None before they are rolled
    pub dice: Option<Dice>,

    /// 0 before rolling, 1 after the initial roll, +1 per reroll round
    pub roll_number: u8,

    pub active_player: PlayerId,

    /// 1-based number of the turn in progress
    pub turn_number: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
}

impl GameSnapshot {
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save this snapshot to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in PlayerId::all() {
            let player = self.player(id);
            let marker = if id == self.active_player { '>' } else { ' ' };
            write!(
                f,
                "{} {:<12} \u{2665} {:>3}  \u{2605} {:>3}",
                marker,
                self.player_names[id.index()],
                player.health,
                player.victory_points
            )?;
            if player.in_arena {
                write!(f, "  [arena]")?;
            }
            writeln!(f)?;
        }

        match &self.dice {
            Some(dice) => {
                let row: Vec<&str> = dice.iter().map(|face| face.glyph()).collect();
                writeln!(f, "  dice: {}", row.join(" "))?;
            }
            None => writeln!(f, "  dice: -")?,
        }

        match self.winner {
            Some(winner) => write!(f, "  {} wins", self.player_names[winner.index()]),
            None => write!(
                f,
                "  turn {}, roll {}",
                self.turn_number, self.roll_number
            ),
        }
    }
}
