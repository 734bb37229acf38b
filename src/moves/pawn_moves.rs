//! Pawn movement rules.
//!
//! Forward steps require an empty target, the double step additionally
//! requires the start rank and an empty intermediate square, and the diagonal
//! capture requires an occupied target. There is no en-passant.

use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::board::Board;
use crate::piece_team::PieceTeam;

/// Pawn legality for a move from `start` to `stop`, ignoring check.
/// Assumes the caller has already rejected same-team targets.
pub fn pawn_move_is_legal(
    board: &Board,
    team: PieceTeam,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> bool {
    let direction = team.forward_direction();
    let d_row = stop.0 - start.0;
    let d_col = stop.1 - start.1;
    let target = board.piece_at(stop);

    // Single forward step.
    if d_col == 0 && d_row == direction && target.is_none() {
        return true;
    }

    // Double step from the start rank, over an empty intermediate square.
    if d_col == 0
        && start.0 == team.pawn_start_row()
        && d_row == 2 * direction
        && target.is_none()
    {
        return match move_board_location(start, direction, 0) {
            Ok(intermediate) => board.piece_at(&intermediate).is_none(),
            Err(_) => false,
        };
    }

    // Diagonal capture onto an occupied square.
    d_col.abs() == 1 && d_row == direction && target.is_some()
}
