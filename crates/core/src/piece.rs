//! Piece module - the falling piece and its rotation with kicks
//!
//! A [`Piece`] is a small `Copy` value: kind, rotation index and grid origin.
//! Translation is unchecked (callers validate against the board first);
//! rotation validates itself and falls back through [`ROTATION_KICKS`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::shapes::{shape, RotationState, MAX_CELLS};
use crate::types::{PieceKind, Rgb, COLUMNS, ROTATION_KICKS};

/// Absolute cells covered by a piece, as (column, row).
pub type PieceCells = ArrayVec<(i8, i8), MAX_CELLS>;

/// A piece instance on (or above) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: u8,
    x: i8,
    y: i8,
}

impl Piece {
    /// New piece in rotation 0, horizontally centered on the top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let size = shape(kind).size as i8;
        Self {
            kind,
            rotation: 0,
            x: COLUMNS as i8 / 2 - size / 2,
            y: 0,
        }
    }

    /// Piece at an explicit rotation and origin. `rotation` wraps.
    pub fn new(kind: PieceKind, rotation: usize, x: i8, y: i8) -> Self {
        let count = shape(kind).rotation_count();
        Self {
            kind,
            rotation: (rotation % count) as u8,
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> usize {
        self.rotation as usize
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Current rotation state matrix.
    pub fn state(&self) -> &'static RotationState {
        shape(self.kind).rotation(self.rotation as usize)
    }

    /// Occupied cells if the origin were at (x, y).
    pub fn cells_at(&self, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> {
        self.state()
            .offsets()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Occupied absolute cells at the current origin.
    ///
    /// May include rows above the board (negative); renderers filter those.
    pub fn occupied_cells(&self) -> PieceCells {
        self.cells_at(self.x, self.y).collect()
    }

    /// Shift the origin. The caller checks validity beforehand.
    ///
    /// Coordinates wrap at the `i8` range. Board-bound pieces never get
    /// close to it, since every committed move is validated first.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    /// Same origin, next rotation state (wrapping).
    pub fn rotated(&self) -> Self {
        let count = shape(self.kind).rotation_count();
        Self {
            rotation: ((self.rotation as usize + 1) % count) as u8,
            ..*self
        }
    }

    /// Advance to the next rotation state, kicking horizontally if needed.
    ///
    /// Tries the unshifted origin first, then each offset in
    /// [`ROTATION_KICKS`] in order; the first valid placement is committed.
    /// Returns `false` and leaves the piece untouched when none fits.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let turned = self.rotated();
        for dx in std::iter::once(0).chain(ROTATION_KICKS) {
            let x = turned.x + dx;
            if board.is_valid_position(&turned, x, turned.y) {
                *self = Self { x, ..turned };
                return true;
            }
        }
        false
    }
}
