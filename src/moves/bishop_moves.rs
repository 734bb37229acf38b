//! Bishop movement rules: diagonal moves with a clear path.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;

/// Diagonal legality shared by bishops and queens: equal row and column
/// distance, with every intermediate square empty.
pub fn diagonal_move_is_legal(board: &Board, start: &BoardLocation, stop: &BoardLocation) -> bool {
    if (stop.0 - start.0).abs() != (stop.1 - start.1).abs() {
        return false;
    }
    board.path_is_clear(start, stop)
}

/// Bishop legality for a move from `start` to `stop`, ignoring check.
#[inline]
pub fn bishop_move_is_legal(board: &Board, start: &BoardLocation, stop: &BoardLocation) -> bool {
    diagonal_move_is_legal(board, start, stop)
}

#[cfg(test)]
mod tests {
    use super::bishop_move_is_legal;
    use crate::game_state::board::Board;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::piece_team::PieceTeam;

    #[test]
    fn bishop_slides_along_clear_diagonals() {
        let mut board = Board::empty();
        board.set_piece(&(2, 2), Some(PieceRecord::new(PieceClass::Bishop, PieceTeam::Dark)));

        assert!(bishop_move_is_legal(&board, &(2, 2), &(5, 5)));
        assert!(bishop_move_is_legal(&board, &(2, 2), &(0, 4)));
        assert!(!bishop_move_is_legal(&board, &(2, 2), &(2, 5)));
    }

    #[test]
    fn bishop_is_stopped_by_an_intermediate_piece() {
        let mut board = Board::empty();
        board.set_piece(&(2, 2), Some(PieceRecord::new(PieceClass::Bishop, PieceTeam::Dark)));
        board.set_piece(&(4, 4), Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light)));

        assert!(!bishop_move_is_legal(&board, &(2, 2), &(6, 6)));
        assert!(bishop_move_is_legal(&board, &(2, 2), &(3, 3)));
    }
}
