//! Full-position snapshots, the unit of history navigation.

use crate::game_state::board::Board;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// An independent copy of everything `go_to_move` restores. Snapshots never
/// alias the live state; the board is a plain value and the capture lists
/// are cloned on both store and restore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub board: Board,
    pub turn: PieceTeam,
    /// Captured pieces per capturing team, indexed by `PieceTeam::index`.
    pub captured: [Vec<PieceRecord>; 2],
}
