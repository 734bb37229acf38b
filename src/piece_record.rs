use crate::{piece_class::PieceClass, piece_team::PieceTeam};

/// Represents a chess piece with its class, team, and movement flag.
/// `has_moved` is set when the Move Applier commits a placement and is
/// load-bearing for castling legality. It is never inferred retroactively.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// Piece team.
    pub team: PieceTeam,
    /// Whether the piece has moved at least once this game.
    pub has_moved: bool,
}

impl PieceRecord {
    /// A fresh piece that has not moved yet.
    #[inline]
    pub const fn new(class: PieceClass, team: PieceTeam) -> Self {
        Self {
            class,
            team,
            has_moved: false,
        }
    }

    /// The same piece with its movement flag set.
    #[inline]
    pub const fn as_moved(self) -> Self {
        Self {
            class: self.class,
            team: self.team,
            has_moved: true,
        }
    }
}
