//! Move validator: full per-move legality short of check on the mover's own
//! king, which the Move Applier probes on a candidate board.
//!
//! The mover is an explicit parameter, so the same routine serves both turn
//! validation and attack-reachability probing without touching shared
//! side-to-move state.

use crate::board_location::{on_board, BoardLocation};
use crate::game_state::board::Board;
use crate::move_generation::castling::can_castle;
use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::king_moves::king_step_is_legal;
use crate::moves::knight_moves::knight_move_is_legal;
use crate::moves::pawn_moves::pawn_move_is_legal;
use crate::moves::queen_moves::queen_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Per-kind legality dispatch, without the castling branch. Front checks
/// (occupied start, mover ownership, target occupancy) are the caller's
/// responsibility.
pub(crate) fn piece_move_is_legal(
    board: &Board,
    piece: &PieceRecord,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> bool {
    match piece.class {
        PieceClass::Pawn => pawn_move_is_legal(board, piece.team, start, stop),
        PieceClass::Knight => knight_move_is_legal(start, stop),
        PieceClass::Bishop => bishop_move_is_legal(board, start, stop),
        PieceClass::Rook => rook_move_is_legal(board, start, stop),
        PieceClass::Queen => queen_move_is_legal(board, start, stop),
        PieceClass::King => king_step_is_legal(start, stop),
    }
}

/// Full move legality for `mover`, ignoring only whether the move leaves the
/// mover's own king in check.
///
/// Front checks short-circuit to `false` in order: both squares on the
/// board, a piece at `start`, owned by `mover`, and a target square that is
/// empty or holds an enemy piece.
pub fn is_valid_move(
    board: &Board,
    mover: PieceTeam,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> bool {
    if !on_board(start) || !on_board(stop) {
        return false;
    }
    let Some(piece) = board.piece_at(start) else {
        return false;
    };
    if piece.team != mover {
        return false;
    }
    if let Some(target) = board.piece_at(stop) {
        if target.team == piece.team {
            return false;
        }
    }

    if piece.class == PieceClass::King && can_castle(board, mover, start, stop) {
        return true;
    }
    piece_move_is_legal(board, &piece, start, stop)
}
