//! Terminal-state detector.
//!
//! Checkmate is decided by exhaustion: if the side to move is in check and
//! no validator-approved `(from, to)` pair resolves it, the game is over.
//! O(64x64) validator calls in the worst case, which is acceptable at this
//! scale.

use crate::game_state::board::Board;
use crate::move_generation::check_detection::is_in_check;
use crate::move_generation::move_validator::is_valid_move;
use crate::piece_team::PieceTeam;

/// Returns true when `mover` is in check and every candidate move leaves the
/// king in check.
pub fn is_checkmate(board: &Board, mover: PieceTeam) -> bool {
    if !is_in_check(board, mover) {
        return false;
    }

    for (start, piece) in board.occupied_squares() {
        if piece.team != mover {
            continue;
        }
        for row in 0..8i8 {
            for col in 0..8i8 {
                let stop = (row, col);
                if !is_valid_move(board, mover, &start, &stop) {
                    continue;
                }

                // Raw placement probe on a board copy. Castling rook shuffles
                // and promotion replacements are not replayed here.
                let mut probe = *board;
                probe.set_piece(&stop, Some(piece));
                probe.set_piece(&start, None);
                if !is_in_check(&probe, mover) {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::is_checkmate;
    use crate::game_state::board::Board;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::piece_team::PieceTeam;

    fn put(board: &mut Board, location: (i8, i8), class: PieceClass, team: PieceTeam) {
        board.set_piece(&location, Some(PieceRecord::new(class, team)));
    }

    #[test]
    fn a_side_not_in_check_is_never_checkmated() {
        let mut board = Board::empty();
        put(&mut board, (7, 7), PieceClass::King, PieceTeam::Dark);
        put(&mut board, (0, 0), PieceClass::Queen, PieceTeam::Light);
        assert!(!is_checkmate(&board, PieceTeam::Dark));
    }

    #[test]
    fn a_supported_queen_on_an_adjacent_square_mates() {
        let mut board = Board::empty();
        put(&mut board, (7, 7), PieceClass::King, PieceTeam::Dark);
        put(&mut board, (6, 6), PieceClass::Queen, PieceTeam::Light);
        put(&mut board, (5, 5), PieceClass::King, PieceTeam::Light);
        assert!(is_checkmate(&board, PieceTeam::Dark));
    }

    #[test]
    fn an_unsupported_adjacent_queen_can_be_captured() {
        let mut board = Board::empty();
        put(&mut board, (7, 7), PieceClass::King, PieceTeam::Dark);
        put(&mut board, (6, 6), PieceClass::Queen, PieceTeam::Light);
        assert!(!is_checkmate(&board, PieceTeam::Dark));
    }

    #[test]
    fn a_blocking_piece_averts_the_mate() {
        // Back-rank pattern: the king is boxed in by its own pawns, but a
        // rook can interpose on the checking file.
        let mut board = Board::empty();
        put(&mut board, (7, 0), PieceClass::King, PieceTeam::Dark);
        put(&mut board, (6, 0), PieceClass::Pawn, PieceTeam::Dark);
        put(&mut board, (6, 1), PieceClass::Pawn, PieceTeam::Dark);
        put(&mut board, (7, 7), PieceClass::Queen, PieceTeam::Light);

        assert!(is_checkmate(&board, PieceTeam::Dark));

        put(&mut board, (5, 4), PieceClass::Rook, PieceTeam::Dark);
        assert!(!is_checkmate(&board, PieceTeam::Dark));
    }
}
