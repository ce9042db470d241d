//! Tests for puzzle grid assembly, access and preview rendering

#[cfg(test)]
mod tests {
    use nonoscan::ConversionError;
    use nonoscan::spatial::{CellState, PuzzleGrid};

    const X: CellState = CellState::Filled;
    const O: CellState = CellState::Empty;

    // Tests row-major cell access
    // Verified by swapping row and column in get
    #[test]
    fn test_cell_access() {
        let grid = PuzzleGrid::from_rows(&[vec![X, O, O], vec![O, O, X]]).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 0), Some(X));
        assert_eq!(grid.get(1, 2), Some(X));
        assert_eq!(grid.get(0, 2), Some(O));
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.filled_count(), 2);
    }

    // Tests iteration over single rows and all rows
    // Verified by offsetting row starts by one cell
    #[test]
    fn test_row_iteration() {
        let rows = vec![vec![X, O], vec![O, X], vec![X, X]];
        let grid = PuzzleGrid::from_rows(&rows).unwrap();

        let second: Vec<CellState> = grid.row(1).unwrap().collect();
        assert_eq!(second, vec![O, X]);
        assert!(grid.row(3).is_none());

        let all: Vec<Vec<CellState>> = grid.rows().map(|row| row.collect()).collect();
        assert_eq!(all, rows);
    }

    // Tests rejection of empty and ragged input
    // Verified by taking the width from the longest row
    #[test]
    fn test_rejects_malformed_rows() {
        assert!(matches!(
            PuzzleGrid::from_rows(&[]),
            Err(ConversionError::InvalidSourceData { .. })
        ));
        assert!(PuzzleGrid::from_rows(&[vec![], vec![]]).is_err());
        assert!(PuzzleGrid::from_rows(&[vec![X, O], vec![X]]).is_err());
    }

    // Tests cell tokens and the two-character preview
    // Verified by rendering filled cells as spaces
    #[test]
    fn test_tokens_and_preview() {
        assert_eq!(X.token(), 'x');
        assert_eq!(O.token(), '_');
        assert!(X.is_filled());
        assert_eq!(CellState::from_filled(false), O);

        let grid = PuzzleGrid::from_rows(&[vec![X, O], vec![O, X]]).unwrap();
        assert_eq!(grid.to_string(), "XX  \n  XX");
    }
}
