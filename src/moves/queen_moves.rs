//! Queen movement rules: the union of rook and bishop legality.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::moves::bishop_moves::diagonal_move_is_legal;
use crate::moves::rook_moves::straight_move_is_legal;

/// Queen legality for a move from `start` to `stop`, ignoring check.
#[inline]
pub fn queen_move_is_legal(board: &Board, start: &BoardLocation, stop: &BoardLocation) -> bool {
    straight_move_is_legal(board, start, stop) || diagonal_move_is_legal(board, start, stop)
}

#[cfg(test)]
mod tests {
    use super::queen_move_is_legal;
    use crate::game_state::board::Board;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::piece_team::PieceTeam;

    #[test]
    fn queen_combines_straight_and_diagonal_moves() {
        let mut board = Board::empty();
        board.set_piece(&(3, 3), Some(PieceRecord::new(PieceClass::Queen, PieceTeam::Light)));

        assert!(queen_move_is_legal(&board, &(3, 3), &(3, 7)));
        assert!(queen_move_is_legal(&board, &(3, 3), &(6, 6)));
        assert!(queen_move_is_legal(&board, &(3, 3), &(0, 3)));
        assert!(!queen_move_is_legal(&board, &(3, 3), &(5, 4)));
    }
}
