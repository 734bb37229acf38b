//! Check analyzer and attack-reachability oracle.
//!
//! Both entry points are pure functions parameterized by the attacking side;
//! nothing here flips or restores a shared side-to-move flag. The oracle
//! reuses the validator's per-kind dispatch minus the castling branch, so a
//! pawn "attacks" a square only when the capture rule would allow the move
//! (the target must be occupied).

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::move_generation::move_validator::piece_move_is_legal;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Locates the given team's king, scanning row by row.
pub fn find_king(board: &Board, team: PieceTeam) -> Option<BoardLocation> {
    board
        .occupied_squares()
        .find(|(_, piece)| piece.class == PieceClass::King && piece.team == team)
        .map(|(location, _)| location)
}

/// Returns true when any piece of `attacker` could move to `target` under
/// ordinary movement rules.
pub fn attacks_square(board: &Board, attacker: PieceTeam, target: &BoardLocation) -> bool {
    if let Some(occupant) = board.piece_at(target) {
        if occupant.team == attacker {
            return false;
        }
    }

    for (location, piece) in board.occupied_squares() {
        if piece.team != attacker || location == *target {
            continue;
        }
        if piece_move_is_legal(board, &piece, &location, target) {
            return true;
        }
    }
    false
}

/// Returns true when `team`'s king is attacked. A board with no king is not
/// a reachable game state; it reads as "not in check" rather than an error.
pub fn is_in_check(board: &Board, team: PieceTeam) -> bool {
    match find_king(board, team) {
        Some(king) => attacks_square(board, team.opposite(), &king),
        None => false,
    }
}
