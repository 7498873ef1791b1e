use crate::chess_errors::ChessErrors;

/// Board coordinate as `(row, col)`, each in `0..=7`.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank
/// (rank 1), so White pawns advance toward row 0. Col 0 is file a.
pub type Square = (i8, i8);

/// Moves a square by a row and column offset.
///
/// Out-of-range squares are never constructed: stepping off the board
/// returns an error, and generation loops simply skip it.
pub fn offset_square(x: Square, d_row: i8, d_col: i8) -> Result<Square, ChessErrors> {
    let y: Square = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::OutOfBounds((x, d_row, d_col)))
    } else {
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_on_board() {
        assert!(matches!(offset_square((0, 0), 1, 1), Ok((1, 1))));
        assert!(matches!(offset_square((7, 7), -2, -1), Ok((5, 6))));
    }

    #[test]
    fn offsets_off_board_are_rejected() {
        assert!(matches!(
            offset_square((0, 0), -1, 0),
            Err(ChessErrors::OutOfBounds(_))
        ));
        assert!(matches!(
            offset_square((3, 7), 0, 1),
            Err(ChessErrors::OutOfBounds(_))
        ));
    }
}
