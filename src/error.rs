//! Error types for the arena dice engine

use crate::core::PlayerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("A match needs exactly {expected} controllers, got {actual}")]
    ControllerCount { expected: usize, actual: usize },

    #[error("Invalid starting player index: {0}")]
    InvalidStartingPlayer(usize),

    #[error(
        "Controller '{controller}' ({player}) returned a keep mask of length {actual} \
         in reroll round {round}, expected {expected}"
    )]
    KeepMaskLength {
        controller: String,
        player: PlayerId,
        round: u8,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid rules configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid game action: {0}")]
    InvalidAction(String),

    #[error("Game is already over, {0} won")]
    GameOver(PlayerId),

    #[error("Game is already over, turn limit reached after {turns} turns")]
    TurnLimitReached { turns: u32 },

    #[error("Match was aborted: {0}")]
    MatchAborted(String),

    #[error("Inconsistent game state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
