//! Core game types: players, dice and rules

pub mod config;
pub mod dice;
pub mod player;

pub use config::{
    RulesConfig, ARENA_ENTRY_BONUS, ARENA_TURN_START_BONUS, DIE_COUNT, MAX_HEALTH, REROLL_ROUNDS,
    VICTORY_POINTS_TO_WIN,
};
pub use dice::{count_face, format_dice, reroll, roll_dice, DieFace, Dice, KeepMask};
pub use player::{PlayerId, PlayerState};
