//! Knight movement rules. Knights jump, so no path check is needed.

use crate::board_location::BoardLocation;

/// Knight legality for a move from `start` to `stop`, ignoring check.
#[inline]
pub fn knight_move_is_legal(start: &BoardLocation, stop: &BoardLocation) -> bool {
    let d_row = (stop.0 - start.0).abs();
    let d_col = (stop.1 - start.1).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

#[cfg(test)]
mod tests {
    use super::knight_move_is_legal;

    #[test]
    fn knight_moves_in_l_shapes_only() {
        assert!(knight_move_is_legal(&(3, 3), &(5, 4)));
        assert!(knight_move_is_legal(&(3, 3), &(1, 2)));
        assert!(knight_move_is_legal(&(3, 3), &(4, 1)));
        assert!(!knight_move_is_legal(&(3, 3), &(5, 5)));
        assert!(!knight_move_is_legal(&(3, 3), &(3, 4)));
        assert!(!knight_move_is_legal(&(3, 3), &(3, 3)));
    }
}
