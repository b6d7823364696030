//! Zero controller for testing and automation
//!
//! Keeps every die and never yields the arena. The baseline that makes no
//! decisions at all, useful for tests and benchmarks.

use crate::core::{DieFace, KeepMask, PlayerState};
use crate::game::controller::PlayerController;
use smallvec::smallvec;

/// A controller that keeps the initial roll and holds the arena
#[derive(Debug, Clone, Default)]
pub struct ZeroController;

impl ZeroController {
    pub fn new() -> Self {
        ZeroController
    }
}

impl PlayerController for ZeroController {
    fn name(&self) -> &str {
        "zero"
    }

    fn keep_dice(
        &mut self,
        _me: PlayerState,
        _opponent: PlayerState,
        dice: &[DieFace],
        _reroll_round: u8,
    ) -> KeepMask {
        smallvec![true; dice.len()]
    }

    fn yield_arena(&mut self, _me: PlayerState, _attacker: PlayerState, _dice: &[DieFace]) -> bool {
        false
    }
}
