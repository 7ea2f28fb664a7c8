//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are open space: they never collide and are never written.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, COLUMNS, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (COLUMNS as usize) * (ROWS as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLUMNS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLUMNS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * (COLUMNS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        COLUMNS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `piece`, with its origin moved to (x, y), fits.
    ///
    /// Every occupied cell must be inside the columns and above the floor;
    /// cells on the board must also be empty. Cells above the top row pass.
    pub fn is_valid_position(&self, piece: &Piece, x: i8, y: i8) -> bool {
        piece.cells_at(x, y).all(|(cx, cy)| {
            if cx < 0 || cx >= COLUMNS as i8 || cy >= ROWS as i8 {
                return false;
            }
            cy < 0 || !self.is_occupied(cx, cy)
        })
    }

    /// Write the piece's cells into the grid.
    ///
    /// Cells outside the board (in practice, rows above the top) are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells_at(piece.x(), piece.y()) {
            self.set(x, y, Some(piece.kind()));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS as usize {
            return false;
        }
        let start = y * COLUMNS as usize;
        let end = start + COLUMNS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, compacting the rest downward.
    ///
    /// Surviving rows keep their relative order; as many empty rows as were
    /// removed appear at the top. Returns the number of rows removed.
    /// Uses a two-pointer pass with no allocation.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = COLUMNS as usize;
        let mut write_y = ROWS as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Rows top to bottom, each `COLUMNS` cells wide.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(COLUMNS as usize)
    }

    /// Copy the grid into a row-major 2D array (render snapshots).
    pub fn write_grid(&self, out: &mut [[Cell; COLUMNS as usize]; ROWS as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// Missing leading rows are empty; `.` or space is empty, any other
    /// character must be a piece letter (`#` locks as I).
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (ROWS as usize).saturating_sub(rows.len());
        for (i, row) in rows.iter().take(ROWS as usize).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in row.chars().take(COLUMNS as usize).enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    '#' => Some(PieceKind::I),
                    other => PieceKind::from_str(&other.to_string()),
                };
                board.set(x as i8, y, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_from_rows_aligns_to_bottom() {
        let board = Board::from_rows(&["T.........", "##########"]);
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));
        assert!(!board.is_occupied(1, 18));
    }

    #[test]
    fn test_validity_above_top_is_open() {
        let board = Board::from_rows(&["##########"]);
        let piece = Piece::new(PieceKind::I, 1, 0, -4);
        assert!(board.is_valid_position(&piece, 0, -4));
        // Fully above the board still must respect the side walls.
        assert!(!board.is_valid_position(&piece, 8, -4));
    }

    #[test]
    fn test_lock_skips_cells_above_top() {
        let mut board = Board::new();
        let piece = Piece::new(PieceKind::I, 1, 0, -2);
        board.lock(&piece);

        assert_eq!(board.get(2, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(2, 1), Some(Some(PieceKind::I)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_write_grid_matches_rows() {
        let board = Board::from_rows(&["Z........L"]);
        let mut grid = [[None; COLUMNS as usize]; ROWS as usize];
        board.write_grid(&mut grid);
        assert_eq!(grid[19][0], Some(PieceKind::Z));
        assert_eq!(grid[19][9], Some(PieceKind::L));
        assert_eq!(grid[18][0], None);
    }
}
