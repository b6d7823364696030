//! Terminal condition check
//!
//! Both players are scanned in seat order, and within a seat the health
//! check runs before the victory-point check. Every condition that fires
//! overwrites the previous one, so the last firing condition decides the
//! winner: a seat-1 condition beats a seat-0 condition from the same pass.

use crate::core::{PlayerId, PlayerState, RulesConfig};
use crate::game::GameEndReason;

/// Evaluate both players, returning the winner and the deciding condition
pub fn check_winner(
    players: &[PlayerState; 2],
    rules: &RulesConfig,
) -> Option<(PlayerId, GameEndReason)> {
    let mut decided = None;
    for id in PlayerId::all() {
        let player = &players[id.index()];
        if player.is_knocked_out() {
            decided = Some((id.other(), GameEndReason::Knockout(id)));
        }
        if player.victory_points >= rules.victory_points_to_win {
            decided = Some((id, GameEndReason::VictoryPoints(id)));
        }
    }
    decided
}
