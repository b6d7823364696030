//! Performance benchmarks for the arena dice engine
//!
//! Measures game execution with Criterion.rs in two modes:
//!
//! 1. **Fresh** - Build a new match for each iteration
//! 2. **Snapshot** - Clone a prepared initial game state each iteration
//!
//! Both modes play RandomController against RandomController. Build with
//! `--no-default-features` to measure without per-event log formatting.

use arena_dice_rs::{
    core::{PlayerId, RulesConfig},
    game::{
        GameLoop, GameResult, GameState, Match, PlayerController, RandomController, VerbosityLevel,
    },
    Result,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::{Duration, Instant};

/// Metrics collected during game execution
#[derive(Debug, Clone)]
struct GameMetrics {
    /// Total turns played
    turns: u32,
    /// Game duration
    duration: Duration,
}

impl GameMetrics {
    fn games_per_sec(&self) -> f64 {
        1.0 / self.duration.as_secs_f64()
    }

    fn turns_per_sec(&self) -> f64 {
        self.turns as f64 / self.duration.as_secs_f64()
    }
}

fn run_fresh_game(seed: u64) -> Result<GameResult> {
    let controllers: Vec<Box<dyn PlayerController>> = vec![
        Box::new(RandomController::with_seed(seed.wrapping_add(0x1234_5678_9ABC_DEF0))),
        Box::new(RandomController::with_seed(seed.wrapping_add(0xFEDC_BA98_7654_3210))),
    ];
    let mut game = Match::new(controllers, (seed % 2) as usize, RulesConfig::default(), seed)?
        .with_verbosity(VerbosityLevel::Silent);
    game.run_to_completion()
}

fn run_game_with_metrics(seed: u64) -> Result<GameMetrics> {
    let start = Instant::now();
    let result = run_fresh_game(seed)?;
    Ok(GameMetrics {
        turns: result.turns_played,
        duration: start.elapsed(),
    })
}

/// Benchmark: Fresh mode - build a new match each iteration
fn bench_game_fresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_execution");
    group.measurement_time(Duration::from_secs(10));

    for seed in [42u64, 12345u64] {
        println!("\nWarmup game (seed {}):", seed);
        if let Ok(metrics) = run_game_with_metrics(seed) {
            println!("  Turns: {}", metrics.turns);
            println!("  Duration: {:?}", metrics.duration);
            println!("  Games/sec: {:.2}", metrics.games_per_sec());
            println!("  Turns/sec: {:.2}", metrics.turns_per_sec());
        }

        group.bench_with_input(BenchmarkId::new("fresh", seed), &seed, |b, &seed| {
            b.iter(|| run_fresh_game(black_box(seed)).expect("Game should complete successfully"));
        });
    }

    group.finish();
}

/// Benchmark: Snapshot mode - clone a prepared game state each iteration
fn bench_game_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_execution");
    group.measurement_time(Duration::from_secs(10));

    let seed = 42u64;
    let mut initial_game = GameState::new_two_player(PlayerId::all()[0]);
    initial_game.logger.set_verbosity(VerbosityLevel::Silent);

    group.bench_function(BenchmarkId::new("snapshot", seed), |b| {
        b.iter(|| {
            let mut game = initial_game.clone();
            game.seed_rng(black_box(seed));

            let mut controller1 = RandomController::with_seed(seed);
            let mut controller2 = RandomController::with_seed(seed + 1);

            let mut game_loop = GameLoop::new(&mut game);
            game_loop
                .run_game(&mut controller1, &mut controller2)
                .expect("Game should complete successfully")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_game_fresh, bench_game_snapshot);
criterion_main!(benches);
