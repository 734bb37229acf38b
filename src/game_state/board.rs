//! Board store: an 8x8 grid of optional pieces.
//!
//! `Board` is a plain value type (`Copy`), so legality probes work on cheap
//! board copies instead of mutate-then-revert sequences against shared state.

use crate::board_location::{on_board, BoardLocation};
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Piece classes of a back rank, left to right.
const BACK_ROW: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

/// 8x8 mapping from location to optional piece. At most one piece per square
/// by construction; the engine does not defend against boards assembled
/// outside its own transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position. Light occupies rows 0 and 1,
    /// Dark rows 6 and 7.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for team in [PieceTeam::Light, PieceTeam::Dark] {
            let back = team.back_row() as usize;
            let pawns = team.pawn_start_row() as usize;
            for (col, class) in BACK_ROW.iter().enumerate() {
                board.squares[back][col] = Some(PieceRecord::new(*class, team));
                board.squares[pawns][col] = Some(PieceRecord::new(PieceClass::Pawn, team));
            }
        }
        board
    }

    #[inline]
    fn indices(location: &BoardLocation) -> Option<(usize, usize)> {
        if on_board(location) {
            Some((location.0 as usize, location.1 as usize))
        } else {
            None
        }
    }

    /// The piece on the given square, or `None` for an empty square or an
    /// off-board location.
    #[inline]
    pub fn piece_at(&self, location: &BoardLocation) -> Option<PieceRecord> {
        let (row, col) = Self::indices(location)?;
        self.squares[row][col]
    }

    /// Places `piece` on the given square, displacing any occupant.
    /// Off-board locations are ignored.
    #[inline]
    pub fn set_piece(&mut self, location: &BoardLocation, piece: Option<PieceRecord>) {
        if let Some((row, col)) = Self::indices(location) {
            self.squares[row][col] = piece;
        }
    }

    /// Iterates every occupied square as `(location, piece)`.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|piece| ((row as i8, col as i8), piece)))
        })
    }

    /// Returns true when every square strictly between `start` and `stop` is
    /// empty. Endpoints are not inspected. Callers pass colinear endpoints
    /// (same row, same column, or same diagonal); the bounds test stops
    /// malformed rays.
    pub fn path_is_clear(&self, start: &BoardLocation, stop: &BoardLocation) -> bool {
        let d_row = (stop.0 - start.0).signum();
        let d_col = (stop.1 - start.1).signum();

        let mut current = (start.0 + d_row, start.1 + d_col);
        while current != *stop {
            if !on_board(&current) {
                return false;
            }
            if self.piece_at(&current).is_some() {
                return false;
            }
            current = (current.0 + d_row, current.1 + d_col);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::piece_team::PieceTeam;

    #[test]
    fn new_game_places_thirty_two_pieces() {
        let board = Board::new_game();
        assert_eq!(board.occupied_squares().count(), 32);
        assert_eq!(
            board.piece_at(&(0, 4)),
            Some(PieceRecord::new(PieceClass::King, PieceTeam::Light))
        );
        assert_eq!(
            board.piece_at(&(7, 3)),
            Some(PieceRecord::new(PieceClass::Queen, PieceTeam::Dark))
        );
        assert_eq!(board.piece_at(&(4, 4)), None);
    }

    #[test]
    fn off_board_locations_read_empty_and_ignore_writes() {
        let mut board = Board::empty();
        assert_eq!(board.piece_at(&(-1, 0)), None);
        board.set_piece(&(8, 8), Some(PieceRecord::new(PieceClass::Rook, PieceTeam::Light)));
        assert_eq!(board.occupied_squares().count(), 0);
    }

    #[test]
    fn path_is_clear_sees_intermediate_occupants_only() {
        let mut board = Board::empty();
        board.set_piece(&(0, 3), Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light)));

        assert!(!board.path_is_clear(&(0, 0), &(0, 5)));
        assert!(board.path_is_clear(&(0, 0), &(0, 3)));
        assert!(board.path_is_clear(&(0, 4), &(0, 7)));
    }

    #[test]
    fn adjacent_squares_have_a_trivially_clear_path() {
        let board = Board::new_game();
        assert!(board.path_is_clear(&(0, 0), &(1, 0)));
    }
}
