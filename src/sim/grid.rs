//! Grid layout for spawn placement and sprite-sheet frames
//!
//! Both callers share the same 1-based cell arithmetic: enemies fill a
//! near-square grid column by column at spawn, and sprite sheets index their
//! frames row by row.

use serde::{Deserialize, Serialize};

/// 1-based row/column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// A near-square grid big enough for a given entity count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    /// Smallest near-square layout with `rows * cols >= count`. Columns
    /// never exceed rows by more than one.
    pub fn for_count(count: usize) -> Self {
        let mut rows = count.isqrt();
        let rest = count - rows * rows;
        let cols = if rest > 0 { rows + 1 } else { rows };
        if rest > rows {
            rows += 1;
        }
        Self { rows, cols }
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

/// Cell of a 1-based `place` filling columns top to bottom. `rows` must be
/// nonzero.
pub fn cell_column_major(place: usize, rows: usize) -> Cell {
    let row = match place % rows {
        0 => rows,
        r => r,
    };
    Cell {
        row,
        col: place.div_ceil(rows),
    }
}

/// Cell of a 1-based `place` filling rows left to right. `cols` must be
/// nonzero.
pub fn cell_row_major(place: usize, cols: usize) -> Cell {
    let col = match place % cols {
        0 => cols,
        c => c,
    };
    Cell {
        row: place.div_ceil(cols),
        col,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layout_for_small_counts() {
        assert_eq!(GridLayout::for_count(1), GridLayout { rows: 1, cols: 1 });
        assert_eq!(GridLayout::for_count(2), GridLayout { rows: 1, cols: 2 });
        assert_eq!(GridLayout::for_count(3), GridLayout { rows: 2, cols: 2 });
        assert_eq!(GridLayout::for_count(5), GridLayout { rows: 2, cols: 3 });
        assert_eq!(GridLayout::for_count(9), GridLayout { rows: 3, cols: 3 });
        assert_eq!(GridLayout::for_count(12), GridLayout { rows: 3, cols: 4 });
        assert_eq!(GridLayout::for_count(13), GridLayout { rows: 4, cols: 4 });
    }

    #[test]
    fn test_zero_count_collapses_the_grid() {
        assert_eq!(GridLayout::for_count(0).capacity(), 0);
    }

    #[test]
    fn test_column_major_walks_rows_first() {
        assert_eq!(cell_column_major(1, 3), Cell { row: 1, col: 1 });
        assert_eq!(cell_column_major(2, 3), Cell { row: 2, col: 1 });
        assert_eq!(cell_column_major(3, 3), Cell { row: 3, col: 1 });
        assert_eq!(cell_column_major(4, 3), Cell { row: 1, col: 2 });
    }

    #[test]
    fn test_row_major_walks_columns_first() {
        assert_eq!(cell_row_major(1, 3), Cell { row: 1, col: 1 });
        assert_eq!(cell_row_major(2, 3), Cell { row: 1, col: 2 });
        assert_eq!(cell_row_major(3, 3), Cell { row: 1, col: 3 });
        assert_eq!(cell_row_major(4, 3), Cell { row: 2, col: 1 });
    }

    proptest! {
        #[test]
        fn prop_layout_fits_count(n in 1usize..500) {
            let layout = GridLayout::for_count(n);
            prop_assert!(layout.capacity() >= n);
            prop_assert!(layout.cols >= layout.rows);
            prop_assert!(layout.cols - layout.rows <= 1);
        }

        #[test]
        fn prop_column_major_round_trips(
            rows in 1usize..20,
            extra in 0usize..2,
            place_seed in 0usize..400,
        ) {
            let cols = rows + extra;
            let place = place_seed % (rows * cols) + 1;
            let cell = cell_column_major(place, rows);
            prop_assert!(cell.row >= 1 && cell.row <= rows);
            prop_assert!(cell.col >= 1 && cell.col <= cols);
            prop_assert_eq!((cell.col - 1) * rows + cell.row, place);
        }

        #[test]
        fn prop_row_major_round_trips(cols in 1usize..20, place_seed in 0usize..400) {
            let place = place_seed + 1;
            let cell = cell_row_major(place, cols);
            prop_assert!(cell.col >= 1 && cell.col <= cols);
            prop_assert_eq!((cell.row - 1) * cols + cell.col, place);
        }
    }
}
