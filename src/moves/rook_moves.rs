//! Rook movement rules: straight-line moves with a clear path.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;

/// Straight-line legality shared by rooks and queens: same row or same
/// column, with every intermediate square empty.
pub fn straight_move_is_legal(board: &Board, start: &BoardLocation, stop: &BoardLocation) -> bool {
    if start.0 != stop.0 && start.1 != stop.1 {
        return false;
    }
    board.path_is_clear(start, stop)
}

/// Rook legality for a move from `start` to `stop`, ignoring check.
#[inline]
pub fn rook_move_is_legal(board: &Board, start: &BoardLocation, stop: &BoardLocation) -> bool {
    straight_move_is_legal(board, start, stop)
}
