//! Main game state structure

use crate::core::{Dice, PlayerId, PlayerState, RulesConfig};
use crate::game::arena::ArenaState;
use crate::game::{GameEndReason, GameLogger, GameSnapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::fmt;

/// Complete state of one match
///
/// The turn engine is the only mutator. Controllers never see this type;
/// they get copies of the individual `PlayerState`s.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Both players, indexed by seat
    pub players: [PlayerState; 2],

    /// Display names per seat (usually the controller names)
    pub player_names: [String; 2],

    /// Whose turn is in progress
    pub active_player: PlayerId,

    /// Set once, when a terminal condition is reached
    pub winner: Option<PlayerId>,

    /// Which condition decided `winner`
    pub end_reason: Option<GameEndReason>,

    pub rules: RulesConfig,

    /// Completed turns
    pub turns_played: u32,

    /// Dice of the turn in progress, None until the first roll
    pub current_dice: Option<Dice>,

    /// 0 before rolling, 1 after the initial roll, +1 per reroll round
    pub roll_number: u8,

    /// Single random stream for every die drawn in the match
    pub rng: ChaCha12Rng,

    pub logger: GameLogger,
}

impl GameState {
    /// Create a match in its starting position
    ///
    /// Both players start at full health, with no points, outside the arena.
    pub fn new(rules: RulesConfig, starting_player: PlayerId) -> Self {
        GameState {
            players: [PlayerState::new(rules.max_health); 2],
            player_names: ["Player 0".to_string(), "Player 1".to_string()],
            active_player: starting_player,
            winner: None,
            end_reason: None,
            rules,
            turns_played: 0,
            current_dice: None,
            roll_number: 0,
            rng: ChaCha12Rng::seed_from_u64(0), // Reseeded by the caller for real games
            logger: GameLogger::new(),
        }
    }

    /// Create a match with default rules
    pub fn new_two_player(starting_player: PlayerId) -> Self {
        Self::new(RulesConfig::default(), starting_player)
    }

    /// Set the RNG seed for deterministic gameplay
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    pub fn set_player_names(&mut self, first: impl Into<String>, second: impl Into<String>) {
        self.player_names = [first.into(), second.into()];
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.index()]
    }

    pub fn player_name(&self, id: PlayerId) -> &str {
        &self.player_names[id.index()]
    }

    /// The player whose turn is not in progress
    pub fn other_player(&self) -> PlayerId {
        self.active_player.other()
    }

    /// Current arena occupancy
    pub fn arena(&self) -> ArenaState {
        ArenaState::from_players(&self.players)
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Record a finished roll so renderers can show it
    pub fn record_roll(&mut self, dice: &Dice) {
        self.current_dice = Some(dice.clone());
        self.roll_number += 1;
    }

    /// Forget the previous turn's dice
    pub fn clear_dice(&mut self) {
        self.current_dice = None;
        self.roll_number = 0;
    }

    /// Hand the turn to the other player
    pub fn advance_turn(&mut self) {
        self.active_player = self.active_player.other();
        self.turns_played += 1;
    }

    /// Read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players,
            player_names: self.player_names.clone(),
            dice: self.current_dice.clone(),
            roll_number: self.roll_number,
            active_player: self.active_player,
            turn_number: self.turns_played + 1,
            winner: self.winner,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arena() {
            ArenaState::OccupiedBy(occupant) => {
                writeln!(f, "GAME STATE: {} is in the arena", occupant)?
            }
            ArenaState::Empty => writeln!(f, "GAME STATE: nobody is in the arena")?,
        }
        for id in PlayerId::all() {
            let player = self.player(id);
            writeln!(
                f,
                "{} has {} health and {} victory points",
                id, player.health, player.victory_points
            )?;
        }
        Ok(())
    }
}
