//! Random AI controller for testing and baseline gameplay
//!
//! Keeps each die with probability one half and yields the arena on a coin
//! flip. Serves as a baseline for more sophisticated strategies.

use crate::core::{DieFace, KeepMask, PlayerState};
use crate::game::controller::PlayerController;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// A controller that makes random choices
///
/// Owns its RNG so its decisions never consume draws from the dice stream.
#[derive(Debug, Clone)]
pub struct RandomController {
    rng: Xoshiro256PlusPlus,
}

impl RandomController {
    /// Create a random controller seeded from system entropy
    pub fn new() -> Self {
        RandomController {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a random controller with a seeded RNG (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        RandomController {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for RandomController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController for RandomController {
    fn name(&self) -> &str {
        "random"
    }

    fn keep_dice(
        &mut self,
        _me: PlayerState,
        _opponent: PlayerState,
        dice: &[DieFace],
        _reroll_round: u8,
    ) -> KeepMask {
        dice.iter().map(|_| self.rng.gen_bool(0.5)).collect()
    }

    fn yield_arena(&mut self, _me: PlayerState, _attacker: PlayerState, _dice: &[DieFace]) -> bool {
        self.rng.gen_bool(0.5)
    }
}
