//! Fixed script controller for deterministic testing
//!
//! Follows a predetermined queue of keep masks and yield answers. Once a
//! queue is exhausted the controller keeps every die and holds the arena.

use crate::core::{DieFace, KeepMask, PlayerState};
use crate::game::controller::PlayerController;
use crate::{ArenaError, Result};
use smallvec::smallvec;
use std::collections::VecDeque;

/// A controller that replays scripted decisions
///
/// Masks are returned exactly as scripted, including their length, so a
/// script can also exercise the engine's mask validation.
#[derive(Debug, Clone)]
pub struct FixedScriptController {
    name: String,
    masks: VecDeque<KeepMask>,
    yields: VecDeque<bool>,
}

impl FixedScriptController {
    pub fn new(name: impl Into<String>) -> Self {
        FixedScriptController {
            name: name.into(),
            masks: VecDeque::new(),
            yields: VecDeque::new(),
        }
    }

    /// Queue keep masks, consumed one per reroll round
    pub fn with_masks(mut self, masks: Vec<KeepMask>) -> Self {
        self.masks.extend(masks);
        self
    }

    /// Queue yield answers, consumed one per yield decision
    pub fn with_yields(mut self, yields: Vec<bool>) -> Self {
        self.yields.extend(yields);
        self
    }

    /// Parse a script like `"110011 000000 y n"`
    ///
    /// Tokens made of `0`/`1` are keep masks (1 = keep), `y`/`n` are yield
    /// answers. Tokens may be separated by whitespace or commas.
    pub fn parse(name: impl Into<String>, script: &str) -> Result<Self> {
        let mut controller = FixedScriptController::new(name);
        for token in script
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
        {
            match token.to_lowercase().as_str() {
                "y" | "yes" => controller.yields.push_back(true),
                "n" | "no" => controller.yields.push_back(false),
                mask if mask.chars().all(|c| c == '0' || c == '1') => {
                    controller.masks.push_back(mask.chars().map(|c| c == '1').collect())
                }
                _ => {
                    return Err(ArenaError::InvalidAction(format!(
                        "invalid script token '{}' (expected 0/1 mask or y/n)",
                        token
                    )))
                }
            }
        }
        Ok(controller)
    }

    pub fn remaining_masks(&self) -> usize {
        self.masks.len()
    }

    pub fn remaining_yields(&self) -> usize {
        self.yields.len()
    }
}

impl PlayerController for FixedScriptController {
    fn name(&self) -> &str {
        &self.name
    }

    fn keep_dice(
        &mut self,
        _me: PlayerState,
        _opponent: PlayerState,
        dice: &[DieFace],
        _reroll_round: u8,
    ) -> KeepMask {
        self.masks
            .pop_front()
            .unwrap_or_else(|| smallvec![true; dice.len()])
    }

    fn yield_arena(&mut self, _me: PlayerState, _attacker: PlayerState, _dice: &[DieFace]) -> bool {
        self.yields.pop_front().unwrap_or(false)
    }
}
