//! Tournament mode for running multiple games in parallel and collecting statistics
//!
//! Games are executed concurrently using rayon. Every game gets its own seeds
//! derived from the master seed, so a tournament is reproducible regardless of
//! how rayon schedules it.

use crate::{
    core::{PlayerId, RulesConfig},
    game::{
        runner::DEFAULT_MAX_TURNS, GameEndReason, HeuristicController, Match, PlayerController,
        RandomController, VerbosityLevel, ZeroController,
    },
    ArenaError, Result,
};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Controller type for tournament games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerType {
    Zero,
    Random,
    Heuristic,
}

impl ControllerType {
    /// Build a fresh controller for a match played under `rules`
    ///
    /// `seed` is only used by stochastic controllers.
    pub fn build(self, seed: u64, rules: &RulesConfig) -> Box<dyn PlayerController> {
        match self {
            ControllerType::Zero => Box::new(ZeroController::new()),
            ControllerType::Random => Box::new(RandomController::with_seed(seed)),
            ControllerType::Heuristic => {
                Box::new(HeuristicController::new().with_max_health(rules.max_health))
            }
        }
    }
}

/// Settings for a tournament run
#[derive(Debug, Clone)]
pub struct TourneyConfig {
    pub games: usize,
    pub p1: ControllerType,
    pub p2: ControllerType,
    /// Master seed; 42 when not given
    pub seed: Option<u64>,
    pub max_turns: u32,
    pub rules: RulesConfig,
}

impl TourneyConfig {
    pub fn new(games: usize, p1: ControllerType, p2: ControllerType) -> Self {
        TourneyConfig {
            games,
            p1,
            p2,
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
            rules: RulesConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Statistics collected during tournament
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentStats {
    /// Games that finished (including turn-limit draws)
    pub games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    /// Games that hit the turn limit
    pub draws: usize,
    /// Games aborted by an error
    pub failed: usize,
    /// Games started by each seat
    pub starts: [usize; 2],
    /// Wins by the seat that moved first
    pub first_mover_wins: usize,
    pub knockouts: usize,
    pub wins_by_controller: FxHashMap<String, usize>,
    pub total_turns: u64,
}

impl TournamentStats {
    fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        self.starts[outcome.starting_player] += 1;
        self.total_turns += outcome.turns_played as u64;

        match outcome.winner {
            Some(winner) => {
                if winner.index() == 0 {
                    self.p1_wins += 1;
                } else {
                    self.p2_wins += 1;
                }
                if winner.index() == outcome.starting_player {
                    self.first_mover_wins += 1;
                }
                if matches!(outcome.end_reason, GameEndReason::Knockout(_)) {
                    self.knockouts += 1;
                }
                *self
                    .wins_by_controller
                    .entry(outcome.controller_names[winner.index()].clone())
                    .or_insert(0) += 1;
            }
            None => self.draws += 1,
        }
    }

    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }

    /// Print the summary tables to stdout
    pub fn print_report(&self) {
        println!("=== Player Position Statistics ===");
        let total = self.games;
        if total > 0 {
            println!(
                "P1 wins: {} ({:.1}%)",
                self.p1_wins,
                100.0 * self.p1_wins as f64 / total as f64
            );
            println!(
                "P2 wins: {} ({:.1}%)",
                self.p2_wins,
                100.0 * self.p2_wins as f64 / total as f64
            );
            println!(
                "Draws: {} ({:.1}%)",
                self.draws,
                100.0 * self.draws as f64 / total as f64
            );
            println!(
                "First mover wins: {} ({:.1}%)",
                self.first_mover_wins,
                100.0 * self.first_mover_wins as f64 / total as f64
            );
            println!("Knockouts: {}", self.knockouts);
            println!("Average game length: {:.1} turns", self.average_turns());
        }
        if self.failed > 0 {
            println!("Failed games: {}", self.failed);
        }

        println!("\n=== Controller Wins ===");
        let mut controller_stats: Vec<_> = self.wins_by_controller.iter().collect();
        controller_stats.sort_by_key(|(name, _)| *name);
        for (name, wins) in controller_stats {
            println!("  {}: {}", name, wins);
        }
    }
}

/// What one finished game contributes to the statistics
#[derive(Debug)]
struct GameOutcome {
    winner: Option<PlayerId>,
    starting_player: usize,
    turns_played: u32,
    end_reason: GameEndReason,
    controller_names: [String; 2],
}

fn run_single_game(
    config: &TourneyConfig,
    master_seed: u64,
    game_idx: usize,
) -> Result<GameOutcome> {
    let game_seed = master_seed.wrapping_add((game_idx as u64).wrapping_mul(0x9E3779B97F4A7C15));
    let p1_seed = game_seed.wrapping_add(0x1234_5678_9ABC_DEF0);
    let p2_seed = game_seed.wrapping_add(0xFEDC_BA98_7654_3210);

    let controllers = vec![
        config.p1.build(p1_seed, &config.rules),
        config.p2.build(p2_seed, &config.rules),
    ];
    let controller_names = [controllers[0].name().to_string(), controllers[1].name().to_string()];
    let starting_player = game_idx % 2;

    let mut game = Match::new(controllers, starting_player, config.rules, game_seed)?
        .with_verbosity(VerbosityLevel::Silent)
        .with_max_turns(config.max_turns);
    let result = game.run_to_completion()?;

    Ok(GameOutcome {
        winner: result.winner,
        starting_player,
        turns_played: result.turns_played,
        end_reason: result.end_reason,
        controller_names,
    })
}

/// Run tournament mode - play multiple games in parallel and collect statistics
pub fn run_tourney(config: &TourneyConfig) -> Result<TournamentStats> {
    if config.games == 0 {
        return Err(ArenaError::InvalidConfig(
            "tournament needs at least one game".to_string(),
        ));
    }
    config.rules.validate()?;

    let master_seed = config.seed.unwrap_or(42);
    let start_time = Instant::now();

    let outcomes: Vec<Result<GameOutcome>> = (0..config.games)
        .into_par_iter()
        .map(|game_idx| run_single_game(config, master_seed, game_idx))
        .collect();

    let mut stats = TournamentStats::default();
    for (game_idx, outcome) in outcomes.iter().enumerate() {
        match outcome {
            Ok(outcome) => stats.record(outcome),
            Err(e) => {
                eprintln!("Warning: Game {} failed: {}", game_idx, e);
                stats.failed += 1;
            }
        }
    }

    let elapsed = start_time.elapsed();
    println!("\n=== Tournament Complete ===");
    println!("Total games played: {}", stats.games);
    println!("Elapsed time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "Games per second: {:.2}\n",
        stats.games as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_games_rejected() {
        let config = TourneyConfig::new(0, ControllerType::Zero, ControllerType::Zero);
        assert!(matches!(run_tourney(&config), Err(ArenaError::InvalidConfig(_))));
    }

    #[test]
    fn test_starting_seat_alternates() {
        let config =
            TourneyConfig::new(5, ControllerType::Heuristic, ControllerType::Random).with_seed(3);
        let stats = run_tourney(&config).unwrap();
        assert_eq!(stats.starts, [3, 2]);
        assert_eq!(stats.games, 5);
        assert_eq!(stats.p1_wins + stats.p2_wins + stats.draws, 5);
    }

    #[test]
    fn test_record_tallies() {
        let mut stats = TournamentStats::default();
        stats.record(&GameOutcome {
            winner: PlayerId::from_index(1),
            starting_player: 1,
            turns_played: 12,
            end_reason: GameEndReason::Knockout(PlayerId::from_index(0).unwrap()),
            controller_names: ["zero".to_string(), "heuristic".to_string()],
        });
        stats.record(&GameOutcome {
            winner: None,
            starting_player: 0,
            turns_played: 30,
            end_reason: GameEndReason::TurnLimit,
            controller_names: ["zero".to_string(), "heuristic".to_string()],
        });

        assert_eq!(stats.games, 2);
        assert_eq!(stats.p2_wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.first_mover_wins, 1);
        assert_eq!(stats.knockouts, 1);
        assert_eq!(stats.wins_by_controller.get("heuristic"), Some(&1));
        assert_eq!(stats.average_turns(), 21.0);
    }
}
