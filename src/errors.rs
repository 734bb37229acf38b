/// Represents the error types that can occur in the rule engine's fallible
/// utilities. Gameplay outcomes (illegal moves, bad navigation targets) are
/// ordinary return values, not errors; this enum covers genuine misuse of
/// the coordinate and notation helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errors {
    /// Indicates an attempted access outside the bounds of the chess board.
    OutOfBounds,
    /// The provided algebraic coordinate is invalid or could not be parsed.
    InvalidAlgebraic,
}
