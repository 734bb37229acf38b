/// Represents the type (class) of a chess piece.
/// Used to distinguish between pawns, knights, bishops, rooks, queens, and kings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

impl PieceClass {
    /// Upper-case letter used by the reduced move notation. Pawns have none.
    #[inline]
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            PieceClass::Pawn => None,
            PieceClass::Knight => Some('N'),
            PieceClass::Bishop => Some('B'),
            PieceClass::Rook => Some('R'),
            PieceClass::Queen => Some('Q'),
            PieceClass::King => Some('K'),
        }
    }
}
