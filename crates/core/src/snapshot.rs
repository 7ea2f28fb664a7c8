//! Read-only view of a session for the presentation layer.
//!
//! Sampled once per tick after the simulation update. `snapshot_into` reuses
//! the caller's buffer so rendering stays allocation-free.

use crate::piece::{Piece, PieceCells};
use crate::types::{Cell, PieceKind, Rgb, COLUMNS, ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
    /// Absolute cells; may include rows above the board.
    pub cells: PieceCells,
}

impl ActiveSnapshot {
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Cells that are on the visible board.
    pub fn visible_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.cells
            .iter()
            .copied()
            .filter(|&(x, y)| x >= 0 && x < COLUMNS as i8 && y >= 0 && y < ROWS as i8)
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
            cells: value.occupied_cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; COLUMNS as usize]; ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; COLUMNS as usize]; ROWS as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_cells_skip_rows_above_board() {
        let snap = ActiveSnapshot::from(Piece::new(PieceKind::I, 1, 0, -2));
        let visible: Vec<_> = snap.visible_cells().collect();
        assert_eq!(visible, vec![(2, 0), (2, 1)]);
        assert_eq!(snap.cells.len(), 4);
    }
}
