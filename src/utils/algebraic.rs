//! Display-coordinate conversions for the reduced move notation.
//!
//! Files run `a`..`h` left to right (`'a' + column`); ranks are derived as
//! `8 - row`, so row 0 carries the label `8`. These are the display
//! coordinates the move-list surface expects, reproduced exactly.

use crate::board_location::{on_board, BoardLocation};
use crate::errors::Errors;

/// Convert a board location to its display coordinate (for example: "e4").
#[inline]
pub fn location_to_algebraic(location: &BoardLocation) -> Result<String, Errors> {
    if !on_board(location) {
        return Err(Errors::OutOfBounds);
    }

    let file = char::from(b'a' + location.1 as u8);
    let rank = char::from(b'0' + (8 - location.0) as u8);
    Ok(format!("{file}{rank}"))
}

/// Convert a display coordinate (for example: "e4") to a board location.
#[inline]
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, Errors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::InvalidAlgebraic);
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(Errors::InvalidAlgebraic);
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(Errors::InvalidAlgebraic);
    }

    let col = (file - b'a') as i8;
    let row = 8 - (rank - b'0') as i8;
    Ok((row, col))
}
