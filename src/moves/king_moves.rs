//! King movement rules for the ordinary single step.
//!
//! The two-square castling shift is validated separately in
//! `move_generation::castling`.

use crate::board_location::BoardLocation;

/// One-square king step legality, ignoring check and castling.
#[inline]
pub fn king_step_is_legal(start: &BoardLocation, stop: &BoardLocation) -> bool {
    (stop.0 - start.0).abs() <= 1 && (stop.1 - start.1).abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::king_step_is_legal;

    #[test]
    fn king_steps_one_square_in_any_direction() {
        assert!(king_step_is_legal(&(4, 4), &(5, 5)));
        assert!(king_step_is_legal(&(4, 4), &(3, 4)));
        assert!(king_step_is_legal(&(4, 4), &(4, 3)));
        assert!(!king_step_is_legal(&(4, 4), &(6, 4)));
        assert!(!king_step_is_legal(&(4, 4), &(4, 6)));
    }
}
