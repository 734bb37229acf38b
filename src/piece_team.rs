/// Represents the team (color) of a chess piece.
/// Used to distinguish between dark (black) and light (white) pieces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    /// The dark (black) side.
    Dark,
    /// The light (white) side.
    Light,
}

impl PieceTeam {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Forward direction for this team's pawns. Light moves up (+1),
    /// Dark moves down (-1).
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => -1,
        }
    }

    /// Row holding this team's pieces at the start of a game.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 7,
        }
    }

    /// Row this team's pawns start on; a pawn on it may take a double step.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => 6,
        }
    }

    /// Row at which this team's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            PieceTeam::Light => 7,
            PieceTeam::Dark => 0,
        }
    }
}
