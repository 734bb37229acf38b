//! Castling legality.
//!
//! A castle is a two-column king shift on the king's home row. All four
//! conditions are mandatory: an unmoved king, a matching unmoved rook on the
//! edge column, an empty corridor strictly between them, and a transit for
//! the king (start through destination inclusive) free of enemy attacks.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::move_generation::check_detection::attacks_square;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Returns true when the move from `start` to `stop` is a legal castle for
/// `mover`.
pub fn can_castle(
    board: &Board,
    mover: PieceTeam,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> bool {
    let Some(king) = board.piece_at(start) else {
        return false;
    };
    if king.class != PieceClass::King || king.team != mover || king.has_moved {
        return false;
    }

    if start.0 != stop.0 || (stop.1 - start.1).abs() != 2 {
        return false;
    }

    let direction: i8 = if stop.1 > start.1 { 1 } else { -1 };
    let rook_col: i8 = if direction > 0 { 7 } else { 0 };
    let Some(rook) = board.piece_at(&(start.0, rook_col)) else {
        return false;
    };
    if rook.class != PieceClass::Rook || rook.team != mover || rook.has_moved {
        return false;
    }

    // Every square strictly between king and rook must be empty.
    let mut col = start.1 + direction;
    while col != rook_col {
        if board.piece_at(&(start.0, col)).is_some() {
            return false;
        }
        col += direction;
    }

    // The king may not start on, cross, or land on an attacked square.
    let enemy = mover.opposite();
    let mut col = start.1;
    loop {
        if attacks_square(board, enemy, &(start.0, col)) {
            return false;
        }
        if col == stop.1 {
            break;
        }
        col += direction;
    }

    true
}
