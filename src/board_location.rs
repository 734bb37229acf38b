use crate::errors::Errors;

/// A `(row, column)` pair, each in `0..=7`. Row 0 is Light's back rank and
/// row 7 is Dark's. Equality and ordering are structural.
pub type BoardLocation = (i8, i8);

/// Returns true when the location lies on the board.
#[inline]
pub fn on_board(x: &BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Moves a board location by a specified row and column offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, Errors>` - Returns the new board location if
///   within bounds, otherwise returns an error.
pub fn move_board_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, Errors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if on_board(&y) {
        Ok(y)
    } else {
        Err(Errors::OutOfBounds)
    }
}
