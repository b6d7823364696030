//! Arena Dice - Main Binary
//!
//! Plays single matches with a text board or runs parallel tournaments.

use arena_dice_rs::{
    core::RulesConfig,
    game::{FixedScriptController, Match, PlayerController, VerbosityLevel},
    tournament::{self, ControllerType as TourneyController, TourneyConfig},
    ArenaError, Result,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Controller type for AI agents
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControllerType {
    /// Keeps every die and never yields
    Zero,
    /// Makes random choices
    Random,
    /// Heuristic AI controller
    Heuristic,
    /// Fixed script controller with predetermined choices (requires --pN-fixed-inputs)
    Fixed,
}

impl ControllerType {
    fn for_tourney(self) -> Result<TourneyController> {
        match self {
            ControllerType::Zero => Ok(TourneyController::Zero),
            ControllerType::Random => Ok(TourneyController::Random),
            ControllerType::Heuristic => Ok(TourneyController::Heuristic),
            ControllerType::Fixed => Err(ArenaError::InvalidAction(
                "fixed controllers cannot be used in tournaments".to_string(),
            )),
        }
    }
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Arena Dice - two-player dice combat engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single match and print it turn by turn
    Play {
        /// Player 1 controller type
        #[arg(long, value_enum, default_value = "heuristic")]
        p1: ControllerType,

        /// Player 2 controller type
        #[arg(long, value_enum, default_value = "random")]
        p2: ControllerType,

        /// Fixed script for player 1: keep masks and yield answers, e.g. "110011 000000 y n"
        #[arg(long, value_name = "SCRIPT")]
        p1_fixed_inputs: Option<String>,

        /// Fixed script for player 2: keep masks and yield answers, e.g. "110011 000000 y n"
        #[arg(long, value_name = "SCRIPT")]
        p2_fixed_inputs: Option<String>,

        /// Set random seed for deterministic games
        #[arg(long)]
        seed: Option<u64>,

        /// Seat that takes the first turn (0 or 1)
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Abandon the match after this many turns
        #[arg(long, default_value_t = 1000)]
        max_turns: u32,

        /// Write the final snapshot as JSON to this file
        #[arg(long, value_name = "FILE")]
        snapshot_json: Option<PathBuf>,
    },

    /// Run many games in parallel and print statistics
    Tourney {
        /// Number of games to run
        #[arg(long, short = 'g', default_value_t = 1000)]
        games: usize,

        /// Player 1 controller type
        #[arg(long, value_enum, default_value = "heuristic")]
        p1: ControllerType,

        /// Player 2 controller type
        #[arg(long, value_enum, default_value = "random")]
        p2: ControllerType,

        /// Master seed for deterministic tournaments
        #[arg(long)]
        seed: Option<u64>,

        /// Abandon a game after this many turns
        #[arg(long, default_value_t = 1000)]
        max_turns: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            p1,
            p2,
            p1_fixed_inputs,
            p2_fixed_inputs,
            seed,
            start,
            verbosity,
            max_turns,
            snapshot_json,
        } => run_play(
            [p1, p2],
            [p1_fixed_inputs, p2_fixed_inputs],
            seed,
            start,
            verbosity.into(),
            max_turns,
            snapshot_json,
        )?,
        Commands::Tourney {
            games,
            p1,
            p2,
            seed,
            max_turns,
        } => {
            println!("=== Arena Dice - Tournament Mode ===\n");
            let config = TourneyConfig {
                games,
                p1: p1.for_tourney()?,
                p2: p2.for_tourney()?,
                seed,
                max_turns,
                rules: RulesConfig::default(),
            };
            if let Some(s) = seed {
                println!("Using tournament seed: {s}");
            }
            println!("Controllers: P1={:?}, P2={:?}", config.p1, config.p2);
            let stats = tournament::run_tourney(&config)?;
            stats.print_report();
        }
    }

    Ok(())
}

fn build_controller(
    controller_type: ControllerType,
    fixed_inputs: Option<String>,
    seat: usize,
    seed: u64,
    rules: &RulesConfig,
) -> Result<Box<dyn PlayerController>> {
    let name = format!("p{}", seat + 1);
    match controller_type {
        ControllerType::Zero => Ok(TourneyController::Zero.build(seed, rules)),
        ControllerType::Random => Ok(TourneyController::Random.build(seed, rules)),
        ControllerType::Heuristic => Ok(TourneyController::Heuristic.build(seed, rules)),
        ControllerType::Fixed => {
            let script = fixed_inputs.ok_or_else(|| {
                ArenaError::InvalidAction(format!(
                    "fixed controller for {name} requires --{name}-fixed-inputs"
                ))
            })?;
            Ok(Box::new(FixedScriptController::parse(name, &script)?))
        }
    }
}

fn run_play(
    controller_types: [ControllerType; 2],
    fixed_inputs: [Option<String>; 2],
    seed: Option<u64>,
    start: usize,
    verbosity: VerbosityLevel,
    max_turns: u32,
    snapshot_json: Option<PathBuf>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    if verbosity >= VerbosityLevel::Minimal {
        println!("Using seed: {seed}");
    }

    let rules = RulesConfig::default();
    let mut controllers = Vec::with_capacity(2);
    let seats = controller_types.into_iter().zip(fixed_inputs).enumerate();
    for (seat, (controller_type, inputs)) in seats {
        let controller_seed = seed.wrapping_add(if seat == 0 {
            0x1234_5678_9ABC_DEF0
        } else {
            0xFEDC_BA98_7654_3210
        });
        let controller = build_controller(controller_type, inputs, seat, controller_seed, &rules)?;
        controllers.push(controller);
    }

    let mut game = Match::new(controllers, start, rules, seed)?
        .with_verbosity(verbosity)
        .with_max_turns(max_turns);

    let result = loop {
        let outcome = game.step()?;
        if verbosity >= VerbosityLevel::Verbose {
            println!("{}\n", game.snapshot());
        }
        if let Some(result) = outcome {
            break result;
        }
    };

    if verbosity >= VerbosityLevel::Minimal {
        println!("\n{}", game.game());
        match result.winner {
            Some(winner) => println!(
                "{} ({}) wins after {} turns: {:?}",
                game.game().player_name(winner),
                winner,
                result.turns_played,
                result.end_reason
            ),
            None => println!("No winner after {} turns", result.turns_played),
        }
    }

    if let Some(path) = snapshot_json {
        game.snapshot().save_to_file(&path)?;
        if verbosity >= VerbosityLevel::Minimal {
            println!("Snapshot written to {}", path.display());
        }
    }

    Ok(())
}
