//! Board module - manages the game grid
//!
//! The board is a W x H grid of [`Cell`] records, fixed at construction.
//! Uses a flat row-major vector for cache locality; it never reallocates.
//! Coordinates: (x, y) where x ranges 0..W (left to right), y ranges 0..H (top to bottom)

use crate::types::{PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// A single board cell.
///
/// Occupancy and color are one field: a filled cell carries the kind that
/// filled it, an empty cell carries nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub fill: Option<PieceKind>,
}

impl Cell {
    pub const EMPTY: Cell = Cell { fill: None };

    pub const fn filled(kind: PieceKind) -> Self {
        Self { fill: Some(kind) }
    }

    pub fn is_occupied(&self) -> bool {
        self.fill.is_some()
    }

    pub fn color(&self) -> Option<Rgb> {
        self.fill.map(|kind| kind.color())
    }
}

/// The game board - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive (got {}x{})",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(cell) if cell.is_occupied())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(Cell::is_occupied))
    }

    /// Borrow one row, top row is 0
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Every cell with its grid position
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % self.width, i / self.width, *cell))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their relative order and settle at the bottom;
    /// the same number of empty rows is inserted at the top, so the height
    /// never changes. Two-pointer compaction, no allocation.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(Cell::EMPTY);

        cleared
    }

    /// Empty every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Fill a whole row with `kind`, except the listed columns.
    ///
    /// Handy for building fixtures; out-of-range rows are ignored.
    pub fn fill_row_except(&mut self, y: usize, kind: PieceKind, gaps: &[usize]) {
        if y >= self.height {
            return;
        }
        for x in 0..self.width {
            let cell = if gaps.contains(&x) {
                Cell::EMPTY
            } else {
                Cell::filled(kind)
            };
            self.cells[y * self.width + x] = cell;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_board_non_square_index() {
        let board = Board::new(3, 5);
        assert_eq!(board.index(2, 4), Some(14));
        assert_eq!(board.index(3, 0), None);
        assert_eq!(board.rows().count(), 5);
    }

    #[test]
    #[should_panic(expected = "board dimensions must be positive")]
    fn test_zero_width_is_rejected() {
        let _ = Board::new(0, 20);
    }

    #[test]
    fn test_cell_color_follows_occupancy() {
        assert_eq!(Cell::EMPTY.color(), None);
        assert!(!Cell::EMPTY.is_occupied());

        let cell = Cell::filled(PieceKind::Z);
        assert!(cell.is_occupied());
        assert_eq!(cell.color(), Some(PieceKind::Z.color()));
    }

    #[test]
    fn test_clear_lines_compacts_in_place() {
        let mut board = Board::new(4, 4);
        board.fill_row_except(3, PieceKind::I, &[]);
        board.set(0, 2, Cell::filled(PieceKind::T));
        board.fill_row_except(1, PieceKind::O, &[]);
        board.set(3, 0, Cell::filled(PieceKind::L));

        assert_eq!(board.clear_lines(), 2);

        // Two surviving rows drop to the bottom in their original order.
        assert_eq!(board.get(3, 2), Some(Cell::filled(PieceKind::L)));
        assert_eq!(board.get(0, 3), Some(Cell::filled(PieceKind::T)));
        assert!(board.row(0).unwrap().iter().all(|c| !c.is_occupied()));
        assert!(board.row(1).unwrap().iter().all(|c| !c.is_occupied()));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_iter_cells_reports_positions() {
        let mut board = Board::new(3, 2);
        board.set(2, 1, Cell::filled(PieceKind::S));

        let filled: Vec<_> = board
            .iter_cells()
            .filter(|(_, _, c)| c.is_occupied())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(filled, vec![(2, 1)]);
    }
}
