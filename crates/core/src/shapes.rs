//! Shape catalog - rotation states for the seven piece kinds
//!
//! Each kind owns an ordered list of rotation states. A rotation state is a
//! square occupancy matrix (2x2, 3x3 or 4x4) whose `true` entries are cells
//! relative to the piece origin (top-left of the matrix). The whole catalog is
//! evaluated at compile time into read-only statics.
//!
//! Rotation order is the order of the list; [`Piece::rotate`](crate::Piece::rotate)
//! steps forward through it and wraps. Kinds with two states (I, S, Z) toggle,
//! the O has a single state.

use crate::types::PieceKind;

/// Largest matrix side in the catalog.
pub const MAX_SIZE: usize = 4;

/// Upper bound on occupied cells in any rotation state.
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE;

/// One orientation of a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationState {
    size: u8,
    cells: [[bool; MAX_SIZE]; MAX_SIZE],
}

impl RotationState {
    /// Build a state from `#`/`.` rows. Row count sets the matrix size.
    const fn parse<const N: usize>(rows: [&str; N]) -> Self {
        let mut cells = [[false; MAX_SIZE]; MAX_SIZE];
        let mut r = 0;
        while r < N {
            let bytes = rows[r].as_bytes();
            let mut c = 0;
            while c < bytes.len() && c < MAX_SIZE {
                cells[r][c] = bytes[c] == b'#';
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Matrix side length.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Occupied local cells as (col, row), row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |row| {
            (0..n).filter_map(move |col| {
                self.cells[row][col].then_some((col as i8, row as i8))
            })
        })
    }
}

/// All rotation states of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    pub size: u8,
    pub rotations: &'static [RotationState],
}

impl Shape {
    /// Number of rotation states (always at least 1).
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Rotation state at `index`, wrapping past the end.
    pub fn rotation(&self, index: usize) -> &'static RotationState {
        &self.rotations[index % self.rotations.len()]
    }
}

static I_ROTATIONS: [RotationState; 2] = [
    RotationState::parse(["....", "####", "....", "...."]),
    RotationState::parse(["..#.", "..#.", "..#.", "..#."]),
];

static J_ROTATIONS: [RotationState; 4] = [
    RotationState::parse(["#..", "###", "..."]),
    RotationState::parse([".##", ".#.", ".#."]),
    RotationState::parse(["...", "###", "..#"]),
    RotationState::parse([".#.", ".#.", "##."]),
];

static L_ROTATIONS: [RotationState; 4] = [
    RotationState::parse(["..#", "###", "..."]),
    RotationState::parse([".#.", ".#.", ".##"]),
    RotationState::parse(["...", "###", "#.."]),
    RotationState::parse(["##.", ".#.", ".#."]),
];

static O_ROTATIONS: [RotationState; 1] = [RotationState::parse(["##", "##"])];

static S_ROTATIONS: [RotationState; 2] = [
    RotationState::parse([".##", "##.", "..."]),
    RotationState::parse([".#.", ".##", "..#"]),
];

static T_ROTATIONS: [RotationState; 4] = [
    RotationState::parse([".#.", "###", "..."]),
    RotationState::parse([".#.", ".##", ".#."]),
    RotationState::parse(["...", "###", ".#."]),
    RotationState::parse([".#.", "##.", ".#."]),
];

static Z_ROTATIONS: [RotationState; 2] = [
    RotationState::parse(["##.", ".##", "..."]),
    RotationState::parse(["..#", ".##", ".#."]),
];

static CATALOG: [Shape; 7] = [
    Shape {
        kind: PieceKind::I,
        size: 4,
        rotations: &I_ROTATIONS,
    },
    Shape {
        kind: PieceKind::J,
        size: 3,
        rotations: &J_ROTATIONS,
    },
    Shape {
        kind: PieceKind::L,
        size: 3,
        rotations: &L_ROTATIONS,
    },
    Shape {
        kind: PieceKind::O,
        size: 2,
        rotations: &O_ROTATIONS,
    },
    Shape {
        kind: PieceKind::S,
        size: 3,
        rotations: &S_ROTATIONS,
    },
    Shape {
        kind: PieceKind::T,
        size: 3,
        rotations: &T_ROTATIONS,
    },
    Shape {
        kind: PieceKind::Z,
        size: 3,
        rotations: &Z_ROTATIONS,
    },
];

/// Look up the shape definition for a kind.
pub fn shape(kind: PieceKind) -> &'static Shape {
    &CATALOG[kind.index()]
}
