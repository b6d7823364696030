//! Match state, turn structure and decision providers

pub mod arena;
pub mod controller;
pub mod effects;
pub mod fixed_script_controller;
pub mod game_loop;
pub mod heuristic_controller;
pub mod logger;
pub mod random_controller;
pub mod runner;
pub mod snapshot;
pub mod state;
pub mod win;
pub mod zero_controller;

pub use arena::{ArenaOutcome, ArenaState};
pub use controller::PlayerController;
pub use effects::Resolution;
pub use fixed_script_controller::FixedScriptController;
pub use game_loop::{GameEndReason, GameLoop, GameResult};
pub use heuristic_controller::HeuristicController;
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use random_controller::RandomController;
pub use runner::Match;
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use zero_controller::ZeroController;
