//! Move applier: propose, probe on a candidate board, then commit.
//!
//! Legality probing never mutates the live board. The candidate position is
//! built on a `Board` copy and simply discarded when it leaves the mover in
//! check, so there is no revert path to keep symmetric (castling included).
//!
//! Promotion is a two-phase protocol: `begin_move` parks a
//! `PendingPromotion` and returns `AwaitingPromotion`; `resolve_promotion`
//! supplies the chosen class and finishes the turn. Until then the board
//! shows the pawn on the far rank and the turn stays uncommitted.

use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::check_detection::is_in_check;
use crate::move_generation::move_validator::is_valid_move;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;

/// Result of proposing a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was legal and the turn is committed.
    Completed,
    /// The move was legal; a pawn reached the far rank and the turn commits
    /// once `resolve_promotion` supplies a piece class.
    AwaitingPromotion,
    /// The move was illegal; nothing changed.
    Rejected,
}

/// The transient state between a pawn reaching the far rank and the external
/// choice of its replacement arriving.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    /// The pawn as it was before the move.
    pub piece: PieceRecord,
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub captured: Option<PieceRecord>,
}

pub(crate) fn begin_move(
    game: &mut GameState,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> MoveOutcome {
    // A parked promotion must be resolved before the next proposal.
    if game.pending_promotion.is_some() {
        return MoveOutcome::Rejected;
    }
    if !is_valid_move(&game.board, game.turn, start, stop) {
        return MoveOutcome::Rejected;
    }
    let Some(piece) = game.board.piece_at(start) else {
        return MoveOutcome::Rejected;
    };

    let mut candidate = game.board;

    // A two-square king move is a castle: relocate the edge rook to the
    // square adjacent to the king's destination.
    if piece.class == PieceClass::King && (stop.1 - start.1).abs() == 2 {
        let (rook_col, rook_stop_col) = if stop.1 > start.1 {
            (7, stop.1 - 1)
        } else {
            (0, stop.1 + 1)
        };
        let rook_start = (start.0, rook_col);
        if let Some(rook) = candidate.piece_at(&rook_start) {
            candidate.set_piece(&(start.0, rook_stop_col), Some(rook.as_moved()));
            candidate.set_piece(&rook_start, None);
        }
    }

    let captured = candidate.piece_at(stop);
    candidate.set_piece(stop, Some(piece.as_moved()));
    candidate.set_piece(start, None);

    if is_in_check(&candidate, game.turn) {
        return MoveOutcome::Rejected;
    }

    game.board = candidate;

    if piece.class == PieceClass::Pawn && stop.0 == game.turn.promotion_row() {
        game.pending_promotion = Some(PendingPromotion {
            piece,
            start: *start,
            stop: *stop,
            captured,
        });
        return MoveOutcome::AwaitingPromotion;
    }

    finish_move(
        game,
        MoveRecord {
            piece,
            start: *start,
            stop: *stop,
            captured,
        },
    );
    MoveOutcome::Completed
}

/// Completes a pending promotion with the chosen class. Pawn and king are
/// refused; with no promotion pending this is a no-op returning `false`.
pub(crate) fn resolve_promotion(game: &mut GameState, class: PieceClass) -> bool {
    if matches!(class, PieceClass::Pawn | PieceClass::King) {
        return false;
    }
    let Some(pending) = game.pending_promotion.take() else {
        return false;
    };

    let promoted = PieceRecord::new(class, pending.piece.team).as_moved();
    game.board.set_piece(&pending.stop, Some(promoted));

    finish_move(
        game,
        MoveRecord {
            piece: pending.piece,
            start: pending.start,
            stop: pending.stop,
            captured: pending.captured,
        },
    );
    true
}

/// Commits a completed move: capture bookkeeping, branch truncation, record
/// append, turn flip, cursor advance, snapshot.
fn finish_move(game: &mut GameState, record: MoveRecord) {
    if let Some(captured) = record.captured {
        game.captured[game.turn.index()].push(captured);
    }

    game.move_history.truncate(game.current_move);
    game.position_history.truncate(game.current_move + 1);

    game.move_history.push(record);
    game.turn = game.turn.opposite();
    game.current_move += 1;
    game.position_history.push(game.snapshot());
}
