//! Effect resolution: turning a final set of dice into state changes
//!
//! Resolution order is fixed: numerals, then hearts, then attacks.

use crate::core::{count_face, DieFace};
use crate::game::arena::{self, ArenaOutcome};
use crate::game::controller::PlayerController;
use crate::game::GameState;
use serde::{Deserialize, Serialize};

/// Summary of one resolution, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Victory points scored from numeral sets
    pub victory_points: u32,
    /// Health actually gained (after the cap)
    pub healed: i32,
    pub arena: ArenaOutcome,
}

/// Victory points scored by numeral sets
///
/// Three or more of numeral `v` score `v`, plus one per extra die. Each
/// numeral scores independently.
pub fn numeral_victory_points(dice: &[DieFace]) -> u32 {
    DieFace::NUMERALS
        .iter()
        .filter_map(|&face| {
            let count = count_face(dice, face) as u32;
            let value = face.numeral()?;
            (count >= 3).then(|| value + (count - 3))
        })
        .sum()
}

/// Award numeral victory points to the active player
pub fn resolve_victory_point_dice(game: &mut GameState, dice: &[DieFace]) -> u32 {
    let points = numeral_victory_points(dice);
    let active = game.active_player;
    game.player_mut(active).gain_victory_points(points);
    points
}

/// Heal the active player by the number of hearts, unless in the arena
pub fn resolve_health_dice(game: &mut GameState, dice: &[DieFace]) -> i32 {
    let hearts = count_face(dice, DieFace::Heal) as u32;
    let max_health = game.rules.max_health;
    let active = game.active_player;
    game.player_mut(active).heal(hearts, max_health)
}

/// Apply all effects of the active player's final dice
pub fn resolve_dice(
    game: &mut GameState,
    dice: &[DieFace],
    defender: &mut dyn PlayerController,
) -> Resolution {
    let victory_points = resolve_victory_point_dice(game, dice);
    let healed = resolve_health_dice(game, dice);
    let arena = arena::resolve_attack(game, dice, defender);
    Resolution {
        victory_points,
        healed,
        arena,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::game::{FixedScriptController, ZeroController};
    use DieFace::*;

    fn p(idx: usize) -> PlayerId {
        PlayerId::from_index(idx).unwrap()
    }

    #[test]
    fn test_four_ones() {
        assert_eq!(numeral_victory_points(&[One, One, One, One, Heal, Attack]), 2);
    }

    #[test]
    fn test_two_numerals_trigger() {
        assert_eq!(numeral_victory_points(&[Two, Two, Two, Three, Three, Three]), 5);
    }

    #[test]
    fn test_no_sets() {
        assert_eq!(numeral_victory_points(&[One, One, Two, Two, Three, Three]), 0);
        assert_eq!(numeral_victory_points(&[Three; 6]), 6);
    }

    #[test]
    fn test_healing() {
        let mut game = GameState::new_two_player(p(0));
        game.players[0].health = 5;
        assert_eq!(resolve_health_dice(&mut game, &[Heal, Heal, Heal, One, Two, Attack]), 3);
        assert_eq!(game.players[0].health, 8);

        game.players[0].health = 9;
        resolve_health_dice(&mut game, &[Heal, Heal, Heal, One, Two, Attack]);
        assert_eq!(game.players[0].health, game.rules.max_health);
    }

    #[test]
    fn test_healing_suppressed_in_arena() {
        let mut game = GameState::new_two_player(p(0));
        game.players[0].health = 4;
        game.players[0].in_arena = true;
        assert_eq!(resolve_health_dice(&mut game, &[Heal; 6]), 0);
        assert_eq!(game.players[0].health, 4);
    }

    #[test]
    fn test_arena_entry_no_damage() {
        let mut game = GameState::new_two_player(p(0));
        let mut defender = ZeroController::new();

        let dice = [Attack, Two, Heal, One, Three, Two];
        let resolution = resolve_dice(&mut game, &dice, &mut defender);

        assert_eq!(resolution.arena, ArenaOutcome::Entered);
        assert!(game.players[0].in_arena);
        assert_eq!(game.players[0].victory_points, 1);
        assert_eq!(game.players[1].health, 10);
    }

    #[test]
    fn test_arena_retention() {
        let mut game = GameState::new_two_player(p(0));
        game.players[0].in_arena = true;
        let mut defender = ZeroController::new();

        let dice = [Attack, Attack, Attack, One, Two, Heal];
        let resolution = resolve_dice(&mut game, &dice, &mut defender);

        assert_eq!(resolution.arena, ArenaOutcome::Retained { damage: 3 });
        assert_eq!(game.players[1].health, 7);
        assert!(game.players[0].in_arena);
        assert_eq!(game.players[0].victory_points, 0);
    }

    #[test]
    fn test_arena_contest_yield_awards_nothing() {
        let mut game = GameState::new_two_player(p(0));
        game.players[1].in_arena = true;
        let mut defender = FixedScriptController::new("yielder").with_yields(vec![true]);

        let dice = [Attack, Attack, One, Two, Three, Heal];
        let resolution = resolve_dice(&mut game, &dice, &mut defender);

        assert_eq!(resolution.arena, ArenaOutcome::Contested { damage: 2, yielded: true });
        assert_eq!(game.players[1].health, 8);
        assert!(!game.players[1].in_arena);
        assert!(game.players[0].in_arena);
        // Taking the arena through a yield is not an entry
        assert_eq!(game.players[0].victory_points, 0);
    }

    #[test]
    fn test_resolution_order() {
        let mut game = GameState::new_two_player(p(0));
        let mut defender = ZeroController::new();

        let dice = [Attack, Attack, Attack, One, One, One];
        let resolution = resolve_dice(&mut game, &dice, &mut defender);

        assert_eq!(resolution.victory_points, 1);
        assert_eq!(resolution.arena, ArenaOutcome::Entered);
        assert_eq!(game.players[0].victory_points, 2);
        assert_eq!(game.players[0].health, 10);
        assert!(game.players[0].in_arena);
        assert_eq!(game.players[1], crate::core::PlayerState::default());
    }

    #[test]
    fn test_heal_applies_before_arena_entry() {
        // Hearts resolve while still outside the arena
        let mut game = GameState::new_two_player(p(0));
        game.players[0].health = 6;
        let mut defender = ZeroController::new();

        let dice = [Heal, Heal, Attack, One, Two, Three];
        let resolution = resolve_dice(&mut game, &dice, &mut defender);

        assert_eq!(resolution.healed, 2);
        assert_eq!(game.players[0].health, 8);
        assert!(game.players[0].in_arena);
    }
}
