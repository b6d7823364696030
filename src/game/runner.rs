//! Match runner
//!
//! Owns a game together with its two controllers so callers can drive a match
//! one turn at a time or to the end without juggling borrows.

use crate::core::{PlayerId, RulesConfig};
use crate::game::controller::PlayerController;
use crate::game::{GameLoop, GameResult, GameSnapshot, GameState, OutputMode, VerbosityLevel};
use crate::{ArenaError, Result};

/// Default turn limit for a match
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// A two-player match with its controllers, seat 0 first
///
/// Once a match has ended, or was aborted by an error, it refuses to play
/// further turns.
pub struct Match {
    game: GameState,
    controllers: [Box<dyn PlayerController>; 2],
    max_turns: u32,
    /// Set once the match has ended and the controllers were notified
    outcome: Option<GameResult>,
    /// Message of the error that aborted the match
    aborted: Option<String>,
}

impl Match {
    /// Set up a match in its starting position
    ///
    /// Fails unless exactly two controllers are given and `starting_player`
    /// is a valid seat. Player names are taken from the controllers.
    pub fn new(
        controllers: Vec<Box<dyn PlayerController>>,
        starting_player: usize,
        rules: RulesConfig,
        seed: u64,
    ) -> Result<Self> {
        let actual = controllers.len();
        let controllers: [Box<dyn PlayerController>; 2] = controllers
            .try_into()
            .map_err(|_| ArenaError::ControllerCount {
                expected: PlayerId::COUNT,
                actual,
            })?;
        let starting_player = PlayerId::from_index(starting_player)
            .ok_or(ArenaError::InvalidStartingPlayer(starting_player))?;
        rules.validate()?;

        let mut game = GameState::new(rules, starting_player);
        game.seed_rng(seed);
        game.set_player_names(controllers[0].name(), controllers[1].name());

        Ok(Match {
            game,
            controllers,
            max_turns: DEFAULT_MAX_TURNS,
            outcome: None,
            aborted: None,
        })
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.game.logger.set_verbosity(verbosity);
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Keep log output in memory instead of printing it
    pub fn with_captured_logs(mut self) -> Self {
        self.game.logger.set_output_mode(OutputMode::Memory);
        self
    }

    /// Play one full turn
    ///
    /// Returns the result once the match has ended (by this turn or by the
    /// turn limit), after notifying both controllers. Stepping a match that
    /// has ended is an error. Any error aborts the match for good.
    pub fn step(&mut self) -> Result<Option<GameResult>> {
        self.ensure_playable()?;

        let [first, second] = &mut self.controllers;
        let mut game_loop = GameLoop::new(&mut self.game).with_max_turns(self.max_turns);
        let result = match game_loop.run_turn_once(&mut **first, &mut **second) {
            Ok(result) => result,
            Err(e) => {
                self.aborted = Some(e.to_string());
                return Err(e);
            }
        };

        if let Some(result) = &result {
            game_loop.notify_game_end(&mut **first, &mut **second, result.winner);
            self.outcome = Some(result.clone());
        }
        Ok(result)
    }

    /// Play turns until a winner is decided or the turn limit is hit
    ///
    /// On a match that has already ended this returns the recorded result
    /// without playing or notifying again.
    pub fn run_to_completion(&mut self) -> Result<GameResult> {
        if let Some(reason) = &self.aborted {
            return Err(ArenaError::MatchAborted(reason.clone()));
        }
        if let Some(result) = &self.outcome {
            return Ok(result.clone());
        }

        let [first, second] = &mut self.controllers;
        let run = GameLoop::new(&mut self.game)
            .with_max_turns(self.max_turns)
            .run_game(&mut **first, &mut **second);
        match run {
            Ok(result) => {
                self.outcome = Some(result.clone());
                Ok(result)
            }
            Err(e) => {
                self.aborted = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn ensure_playable(&self) -> Result<()> {
        if let Some(reason) = &self.aborted {
            return Err(ArenaError::MatchAborted(reason.clone()));
        }
        if let Some(winner) = self.game.winner {
            return Err(ArenaError::GameOver(winner));
        }
        if let Some(result) = &self.outcome {
            return Err(ArenaError::TurnLimitReached {
                turns: result.turns_played,
            });
        }
        Ok(())
    }

    /// Final result, once the match has ended
    pub fn result(&self) -> Option<&GameResult> {
        self.outcome.as_ref()
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.game.winner
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }
}
