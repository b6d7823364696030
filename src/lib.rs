//! Arena Dice - two-player dice combat engine
//!
//! Players alternate turns rolling six dice with two selective rerolls,
//! then resolve victory points, healing and attacks. A single arena grants
//! bonus points to whoever holds it. The engine is single-threaded and
//! deterministic for a given seed; decision making is delegated to
//! pluggable [`game::PlayerController`] implementations.

pub mod core;
pub mod error;
pub mod game;
pub mod tournament;

pub use error::{ArenaError, Result};
