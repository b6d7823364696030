//! End-to-end turn engine tests
//!
//! Drives whole turns through the public phase entry points with known dice,
//! and full matches through `Match` with scripted controllers.

use arena_dice_rs::core::{
    DieFace, KeepMask, PlayerId, PlayerState, RulesConfig, ARENA_TURN_START_BONUS, MAX_HEALTH,
};
use arena_dice_rs::game::{
    ArenaOutcome, FixedScriptController, GameEndReason, GameLoop, GameState, Match,
    PlayerController, VerbosityLevel, ZeroController,
};
use arena_dice_rs::ArenaError;
use smallvec::smallvec;
use DieFace::*;

fn p(idx: usize) -> PlayerId {
    PlayerId::from_index(idx).unwrap()
}

fn silent_game(starting: usize) -> GameState {
    let mut game = GameState::new_two_player(p(starting));
    game.logger.set_verbosity(VerbosityLevel::Silent);
    game
}

/// Run the start and resolution phases of a turn with fixed final dice
fn play_turn_with_dice(
    game: &mut GameState,
    dice: &[DieFace],
    defender: &mut dyn PlayerController,
) -> ArenaOutcome {
    let mut game_loop = GameLoop::new(game);
    game_loop.start_turn();
    game_loop.finish_turn(dice, defender).arena
}

#[test]
fn test_opening_turn_scenario() {
    let mut game = silent_game(0);

    let dice = [Attack, Attack, Attack, One, One, One];
    play_turn_with_dice(&mut game, &dice, &mut ZeroController::new());

    assert_eq!(
        game.players[0],
        PlayerState {
            health: MAX_HEALTH,
            victory_points: 2,
            in_arena: true,
        }
    );
    assert_eq!(game.players[1], PlayerState::default());
    assert_eq!(game.active_player, p(1));
    assert_eq!(game.winner, None);
}

#[test]
fn test_occupant_collects_bonus_and_hits() {
    let mut game = silent_game(0);
    game.players[0].in_arena = true;

    let dice = [Attack, Attack, Attack, Heal, One, Two];
    let outcome = play_turn_with_dice(&mut game, &dice, &mut ZeroController::new());

    assert_eq!(outcome, ArenaOutcome::Retained { damage: 3 });
    assert_eq!(game.players[0].victory_points, ARENA_TURN_START_BONUS);
    assert_eq!(game.players[1].health, MAX_HEALTH - 3);
    assert!(game.players[0].in_arena);
}

#[test]
fn test_yield_transfers_without_points() {
    let mut game = silent_game(1);
    game.players[0].in_arena = true;
    let mut occupant = FixedScriptController::new("occupant").with_yields(vec![true]);

    let dice = [Attack, Attack, One, Two, Three, Heal];
    let outcome = play_turn_with_dice(&mut game, &dice, &mut occupant);

    assert_eq!(outcome, ArenaOutcome::Contested { damage: 2, yielded: true });
    assert_eq!(game.players[0].health, MAX_HEALTH - 2);
    assert!(!game.players[0].in_arena);
    assert!(game.players[1].in_arena);
    assert_eq!(game.players[1].victory_points, 0);
}

#[test]
fn test_zero_effect_turn_only_passes_the_turn() {
    let mut game = silent_game(0);
    game.players[1].in_arena = true;
    let before = game.players;
    let mut occupant = FixedScriptController::new("occupant").with_yields(vec![true]);

    // No attacks, no set of three numerals, hearts at full health
    play_turn_with_dice(&mut game, &[One, One, Two, Two, Three, Heal], &mut occupant);

    assert_eq!(game.players, before);
    assert_eq!(game.active_player, p(1));
    assert_eq!(occupant.remaining_yields(), 1);
}

#[test]
fn test_simultaneous_conditions_later_seat_wins() {
    let mut game = silent_game(1);
    game.players[0].health = 2;
    game.players[0].in_arena = true;
    game.players[1].victory_points = 17;

    // Seat 1 scores 3 from threes and knocks seat 0 out in the same turn
    let dice = [Three, Three, Three, Attack, Attack, Attack];
    play_turn_with_dice(&mut game, &dice, &mut ZeroController::new());

    assert!(game.players[0].is_knocked_out());
    assert_eq!(game.players[1].victory_points, 20);
    assert_eq!(game.winner, Some(p(1)));
    assert_eq!(game.end_reason, Some(GameEndReason::VictoryPoints(p(1))));
}

#[test]
fn test_knockout_of_later_seat_overrides_points() {
    let mut game = silent_game(0);
    game.players[0].victory_points = 19;
    game.players[0].in_arena = true;
    game.players[1].health = 2;

    // Seat 0 reaches the threshold, then seat 1's knockout is checked last
    let dice = [Attack, Attack, Heal, One, Two, Three];
    play_turn_with_dice(&mut game, &dice, &mut ZeroController::new());

    assert_eq!(game.winner, Some(p(0)));
    assert_eq!(game.end_reason, Some(GameEndReason::Knockout(p(1))));
}

#[test]
fn test_short_mask_aborts_match() {
    let bad = FixedScriptController::new("short-mask").with_masks(vec![smallvec![true, false]]);
    let mut game = Match::new(
        vec![Box::new(bad) as Box<dyn PlayerController>, Box::new(ZeroController::new())],
        0,
        RulesConfig::default(),
        99,
    )
    .unwrap()
    .with_verbosity(VerbosityLevel::Silent);

    let err = game.step().unwrap_err();

    assert!(matches!(
        err,
        ArenaError::KeepMaskLength { ref controller, round: 0, expected: 6, actual: 2, .. }
            if controller == "short-mask"
    ));
    assert!(err.to_string().contains("short-mask"));
}

#[test]
fn test_mask_violation_aborts_match_for_good() {
    // Seat 0 plays its first turn normally, takes the arena, and breaks the
    // mask contract on its second turn after the arena bonus is paid
    let masks: Vec<KeepMask> = vec![smallvec![true; 6], smallvec![true; 6], smallvec![true, false]];
    let bad = FixedScriptController::new("bad").with_masks(masks);
    let mut game = Match::new(
        vec![Box::new(bad) as Box<dyn PlayerController>, Box::new(ZeroController::new())],
        0,
        RulesConfig::default(),
        17,
    )
    .unwrap()
    .with_verbosity(VerbosityLevel::Silent);

    assert_eq!(game.step().unwrap(), None);
    assert_eq!(game.step().unwrap(), None);
    assert!(game.game().players[0].in_arena);

    let err = game.step().unwrap_err();
    assert!(matches!(err, ArenaError::KeepMaskLength { actual: 2, .. }));
    assert!(game.is_aborted());
    let after_error = game.game().players;

    assert!(matches!(game.step(), Err(ArenaError::MatchAborted(ref msg)) if msg.contains("'bad'")));
    assert!(matches!(game.run_to_completion(), Err(ArenaError::MatchAborted(_))));
    assert_eq!(game.game().players, after_error);
    assert_eq!(game.game().turns_played, 2);
}

#[test]
fn test_second_reroll_round_is_validated() {
    let masks: Vec<KeepMask> = vec![smallvec![true; 6], smallvec![true; 7]];
    let bad = FixedScriptController::new("long-mask").with_masks(masks);
    let mut game = Match::new(
        vec![Box::new(ZeroController::new()) as Box<dyn PlayerController>, Box::new(bad)],
        1,
        RulesConfig::default(),
        99,
    )
    .unwrap()
    .with_verbosity(VerbosityLevel::Silent);

    let err = game.step().unwrap_err();
    assert!(matches!(
        err,
        ArenaError::KeepMaskLength { round: 1, expected: 6, actual: 7, .. }
    ));
}

#[test]
fn test_full_match_terminates_with_consistent_result() {
    for seed in 0..20 {
        let mut game = Match::new(
            vec![
                Box::new(FixedScriptController::new("keeper")) as Box<dyn PlayerController>,
                Box::new(ZeroController::new()),
            ],
            (seed % 2) as usize,
            RulesConfig::default(),
            seed,
        )
        .unwrap()
        .with_verbosity(VerbosityLevel::Silent);

        let result = game.run_to_completion().unwrap();
        let winner = result.winner.expect("arena bonuses always end the match");
        let state = game.game();

        match result.end_reason {
            GameEndReason::Knockout(loser) => {
                assert_eq!(loser, winner.other());
                assert!(state.player(loser).is_knocked_out());
            }
            GameEndReason::VictoryPoints(id) => {
                assert_eq!(id, winner);
                assert!(state.player(id).victory_points >= state.rules.victory_points_to_win);
            }
            GameEndReason::TurnLimit => panic!("unexpected turn limit"),
        }
        assert!(state.players.iter().filter(|player| player.in_arena).count() <= 1);
        assert!(state.players.iter().all(|player| player.health <= MAX_HEALTH));
    }
}
