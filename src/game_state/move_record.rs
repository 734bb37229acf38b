//! Committed-move records and their reduced display notation.

use crate::board_location::BoardLocation;
use crate::piece_record::PieceRecord;
use crate::utils::algebraic::location_to_algebraic;

/// One committed move. Recorded only when a turn completes, which for
/// promotions means after the replacement choice resolves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// The moving piece as it was before the move.
    pub piece: PieceRecord,
    pub start: BoardLocation,
    pub stop: BoardLocation,
    /// The piece that stood on `stop`, if any.
    pub captured: Option<PieceRecord>,
}

impl MoveRecord {
    /// Reduced from-to label: `<PieceLetter><from>-<to>` with the pawn
    /// letter omitted, e.g. `Nb8-c6` or `e7-e5`. Not standard algebraic
    /// notation: no capture, check, disambiguation, or castling symbols.
    pub fn notation(&self) -> String {
        let mut out = String::new();
        if let Some(letter) = self.piece.class.notation_letter() {
            out.push(letter);
        }
        out.push_str(&square_label(&self.start));
        out.push('-');
        out.push_str(&square_label(&self.stop));
        out
    }
}

fn square_label(location: &BoardLocation) -> String {
    location_to_algebraic(location).unwrap_or_else(|_| "??".to_owned())
}

#[cfg(test)]
mod tests {
    use super::MoveRecord;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::piece_team::PieceTeam;

    #[test]
    fn pawn_moves_omit_the_piece_letter() {
        let record = MoveRecord {
            piece: PieceRecord::new(PieceClass::Pawn, PieceTeam::Light),
            start: (1, 4),
            stop: (3, 4),
            captured: None,
        };
        assert_eq!(record.notation(), "e7-e5");
    }

    #[test]
    fn piece_moves_carry_their_upper_case_letter() {
        let knight = MoveRecord {
            piece: PieceRecord::new(PieceClass::Knight, PieceTeam::Dark),
            start: (0, 1),
            stop: (2, 2),
            captured: None,
        };
        assert_eq!(knight.notation(), "Nb8-c6");

        let king = MoveRecord {
            piece: PieceRecord::new(PieceClass::King, PieceTeam::Light),
            start: (7, 4),
            stop: (7, 6),
            captured: None,
        };
        assert_eq!(king.notation(), "Ke1-g1");
    }

    #[test]
    fn captures_render_the_same_as_quiet_moves() {
        let record = MoveRecord {
            piece: PieceRecord::new(PieceClass::Queen, PieceTeam::Light),
            start: (4, 3),
            stop: (6, 3),
            captured: Some(PieceRecord::new(PieceClass::Rook, PieceTeam::Dark)),
        };
        assert_eq!(record.notation(), "Qd4-d2");
    }
}
