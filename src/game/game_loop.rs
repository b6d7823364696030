//! Game loop implementation
//!
//! Runs turns: arena start bonus, roll and rerolls, effect resolution, win
//! check, turn advance. The loop borrows the game state and is handed both
//! controllers on every call, seat 0 first.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When verbose-logging feature is disabled, this becomes a no-op at compile time,
/// eliminating all format! allocations in hot loops.
macro_rules! log_if_verbose {
    ($logger:expr, $level:ident, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $logger.$level(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$logger;
        }
    };
}

use crate::core::{format_dice, reroll, roll_dice, DieFace, Dice, PlayerId, ARENA_TURN_START_BONUS};
use crate::game::arena::ArenaOutcome;
use crate::game::controller::PlayerController;
use crate::game::effects::{self, Resolution};
use crate::game::{win, GameState, VerbosityLevel};
use crate::{ArenaError, Result};
use serde::{Deserialize, Serialize};

/// Result of running a game to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Winner of the game (None if the turn limit was hit)
    pub winner: Option<PlayerId>,
    /// Total number of turns played
    pub turns_played: u32,
    /// Reason the game ended
    pub end_reason: GameEndReason,
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    /// The given player's health dropped to 0 or less
    Knockout(PlayerId),
    /// The given player reached the victory-point threshold
    VictoryPoints(PlayerId),
    /// Game reached maximum turn limit
    TurnLimit,
}

/// Order the two seat controllers as (active, other)
fn seat_controllers<'c>(
    active: PlayerId,
    controller1: &'c mut dyn PlayerController,
    controller2: &'c mut dyn PlayerController,
) -> (&'c mut dyn PlayerController, &'c mut dyn PlayerController) {
    if active.index() == 0 {
        (controller1, controller2)
    } else {
        (controller2, controller1)
    }
}

/// Game loop manager
///
/// Handles turn progression and win condition checking
pub struct GameLoop<'a> {
    /// The game state
    pub game: &'a mut GameState,
    /// Maximum turns before giving up without a winner
    max_turns: u32,
    /// Verbosity level for output (cached from game.logger)
    pub verbosity: VerbosityLevel,
}

impl<'a> GameLoop<'a> {
    /// Create a new game loop for the given game state
    pub fn new(game: &'a mut GameState) -> Self {
        let verbosity = game.logger.verbosity();
        GameLoop {
            game,
            max_turns: 1000, // Default maximum turns
            verbosity,
        }
    }

    /// Set maximum turns before the game is abandoned
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set verbosity level on both the loop and the game's logger
    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self.game.logger.set_verbosity(verbosity);
        self
    }

    /// Run the game loop until a win condition or the turn limit
    pub fn run_game(
        &mut self,
        controller1: &mut dyn PlayerController,
        controller2: &mut dyn PlayerController,
    ) -> Result<GameResult> {
        loop {
            if let Some(result) = self.run_turn_once(controller1, controller2)? {
                self.notify_game_end(controller1, controller2, result.winner);
                return Ok(result);
            }
        }
    }

    /// Run up to `turns_to_run` turns, stopping early if the game ends
    ///
    /// Returns `Ok(None)` if every turn ran and the game is still going.
    pub fn run_turns(
        &mut self,
        controller1: &mut dyn PlayerController,
        controller2: &mut dyn PlayerController,
        turns_to_run: u32,
    ) -> Result<Option<GameResult>> {
        for _ in 0..turns_to_run {
            if let Some(result) = self.run_turn_once(controller1, controller2)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Run a single turn and check for game-ending conditions
    ///
    /// Returns:
    /// - `Ok(Some(GameResult))` if the game is over (before or after this turn)
    /// - `Ok(None)` if the game should continue with another turn
    /// - `Err(_)` if a controller broke its contract or the recorded result is
    ///   inconsistent
    pub fn run_turn_once(
        &mut self,
        controller1: &mut dyn PlayerController,
        controller2: &mut dyn PlayerController,
    ) -> Result<Option<GameResult>> {
        if let Some(result) = self.current_result()? {
            return Ok(Some(result));
        }

        if self.game.turns_played >= self.max_turns {
            log_if_verbose!(self.game.logger, minimal, "Turn limit of {} reached", self.max_turns);
            return Ok(Some(GameResult {
                winner: None,
                turns_played: self.game.turns_played,
                end_reason: GameEndReason::TurnLimit,
            }));
        }

        let (active, other) = seat_controllers(self.game.active_player, controller1, controller2);
        self.start_turn();
        let dice = self.resolve_turn_dice(active)?;
        self.finish_turn(&dice, other);

        self.current_result()
    }

    /// Start-of-turn: clear old dice and pay the arena bonus
    pub fn start_turn(&mut self) {
        let active = self.game.active_player;
        self.game.clear_dice();
        log_if_verbose!(
            self.game.logger,
            normal,
            "=== Turn {}: {} ({}) ===",
            self.game.turns_played + 1,
            self.game.player_name(active),
            active
        );

        let player = self.game.player_mut(active);
        if player.in_arena {
            player.gain_victory_points(ARENA_TURN_START_BONUS);
            log_if_verbose!(
                self.game.logger,
                normal,
                "{} starts the turn in the arena: +{} VP",
                active,
                ARENA_TURN_START_BONUS
            );
        }
    }

    /// Roll the dice and run every reroll round with the active controller
    ///
    /// Returns the dice after the last reroll round.
    pub fn resolve_turn_dice(&mut self, controller: &mut dyn PlayerController) -> Result<Dice> {
        let active = self.game.active_player;
        let die_count = self.game.rules.die_count;

        let mut dice = roll_dice(&mut self.game.rng, die_count);
        self.game.record_roll(&dice);
        log_if_verbose!(self.game.logger, verbose, "{} rolls {}", active, format_dice(&dice));

        for round in 0..self.game.rules.reroll_rounds {
            let me = *self.game.player(active);
            let opponent = *self.game.player(active.other());
            let keep = controller.keep_dice(me, opponent, &dice, round);

            if keep.len() != dice.len() {
                return Err(ArenaError::KeepMaskLength {
                    controller: controller.name().to_string(),
                    player: active,
                    round,
                    expected: dice.len(),
                    actual: keep.len(),
                });
            }
            #[cfg(feature = "verbose-logging")]
            self.game.logger.controller_choice(
                controller.name(),
                &format!(
                    "keeps {} of {} dice in round {}",
                    keep.iter().filter(|&&k| k).count(),
                    dice.len(),
                    round + 1
                ),
            );

            dice = reroll(&mut self.game.rng, &dice, &keep);
            self.game.record_roll(&dice);
            log_if_verbose!(
                self.game.logger,
                verbose,
                "{} rerolls to {}",
                active,
                format_dice(&dice)
            );
        }

        Ok(dice)
    }

    /// Resolve the final dice, check for a winner and pass the turn
    ///
    /// `defender` is the controller of the non-active player. The turn is
    /// always passed, even when this turn decided the game.
    pub fn finish_turn(
        &mut self,
        dice: &[DieFace],
        defender: &mut dyn PlayerController,
    ) -> Resolution {
        let active = self.game.active_player;
        log_if_verbose!(self.game.logger, normal, "{} final dice: {}", active, format_dice(dice));

        let resolution = effects::resolve_dice(self.game, dice, defender);
        self.log_resolution(active, &resolution);

        self.check_win_condition();
        self.game.advance_turn();
        resolution
    }

    /// Record the winner if a terminal condition holds
    ///
    /// The winner is only ever set once per match.
    pub fn check_win_condition(&mut self) -> Option<PlayerId> {
        if self.game.winner.is_none() {
            let decided = win::check_winner(&self.game.players, &self.game.rules);
            if let Some((winner, reason)) = decided {
                self.game.winner = Some(winner);
                self.game.end_reason = Some(reason);
                log_if_verbose!(
                    self.game.logger,
                    minimal,
                    "{} ({}) wins: {:?}",
                    self.game.player_name(winner),
                    winner,
                    reason
                );
            }
        }
        self.game.winner
    }

    /// The result of a decided game, or `None` while it is still running
    ///
    /// `winner` and `end_reason` are always recorded together; a winner
    /// without a reason is reported as `ArenaError::InvalidState`.
    fn current_result(&self) -> Result<Option<GameResult>> {
        let Some(winner) = self.game.winner else {
            return Ok(None);
        };
        let end_reason = self.game.end_reason.ok_or_else(|| {
            ArenaError::InvalidState(format!(
                "{} is the winner but no end reason was recorded",
                winner
            ))
        })?;
        Ok(Some(GameResult {
            winner: Some(winner),
            turns_played: self.game.turns_played,
            end_reason,
        }))
    }

    fn log_resolution(&self, active: PlayerId, resolution: &Resolution) {
        if resolution.victory_points > 0 {
            log_if_verbose!(
                self.game.logger,
                normal,
                "{} scores {} VP from numerals",
                active,
                resolution.victory_points
            );
        }
        if resolution.healed > 0 {
            log_if_verbose!(self.game.logger, normal, "{} heals {}", active, resolution.healed);
        }
        match resolution.arena {
            ArenaOutcome::Entered => {
                log_if_verbose!(self.game.logger, normal, "{} enters the arena", active);
            }
            ArenaOutcome::Retained { damage } => {
                log_if_verbose!(
                    self.game.logger,
                    normal,
                    "{} attacks from the arena for {}",
                    active,
                    damage
                );
            }
            ArenaOutcome::Contested { damage, yielded } => {
                log_if_verbose!(
                    self.game.logger,
                    normal,
                    "{} attacks the arena for {}",
                    active,
                    damage
                );
                if yielded {
                    log_if_verbose!(
                        self.game.logger,
                        normal,
                        "{} yields the arena to {}",
                        active.other(),
                        active
                    );
                }
            }
        }
    }

    /// Tell both controllers how the game ended
    pub fn notify_game_end(
        &self,
        controller1: &mut dyn PlayerController,
        controller2: &mut dyn PlayerController,
        winner: Option<PlayerId>,
    ) {
        let [first, second] = PlayerId::all();
        controller1.on_game_end(*self.game.player(first), winner == Some(first));
        controller2.on_game_end(*self.game.player(second), winner == Some(second));
    }
}
