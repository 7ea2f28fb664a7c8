//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Frame clock rate |
//! | `TICK_MS` | 16 | Frame interval in milliseconds |
//! | `BASE_FALL_INTERVAL_SECS` | 0.5 | Gravity interval at level 1 |
//! | `LEVEL_SPEEDUP` | 0.1 | Interval divisor growth per level |
//! | `SOFT_DROP_DIVISOR` | 5 | Soft drop is 5x faster |
//! | `MIN_FALL_INTERVAL_SECS` | 0.02 | Floor for the soft drop interval |
//! | `POINTS_PER_LINE` | 100 | Flat score per cleared row |
//! | `LINES_PER_LEVEL` | 10 | Rows needed to advance a level |
//! | `SOFT_DROP_GRACE_MS` | 150 | Held-key timeout for terminals without key release |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, InputFrame, PieceKind, COLUMNS, ROWS};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! let frame = InputFrame::with(GameAction::HardDrop);
//! assert!(frame.hard_drop && !frame.is_idle());
//!
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const COLUMNS: u8 = 10;

/// Board height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Frame clock rate (one simulation tick per frame)
pub const FPS: u32 = 60;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1, in seconds
pub const BASE_FALL_INTERVAL_SECS: f64 = 0.5;

/// Each level past the first adds this much to the interval divisor
pub const LEVEL_SPEEDUP: f64 = 0.1;

/// Soft drop divides the normal interval by this factor
pub const SOFT_DROP_DIVISOR: f64 = 5.0;

/// Soft drop interval never goes below this, in seconds
pub const MIN_FALL_INTERVAL_SECS: f64 = 0.02;

/// Flat score for each cleared row (no multi-line bonus)
pub const POINTS_PER_LINE: u32 = 100;

/// Cleared rows needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level at session start
pub const INITIAL_LEVEL: u32 = 1;

/// Soft drop stays held this long after the last press/repeat when the
/// terminal does not report key releases.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Horizontal kick offsets tried, in order, when a rotation collides.
pub const ROTATION_KICKS: [i8; 4] = [-1, 1, -2, 2];

/// The seven piece kinds
///
/// Each kind has a distinct shape and color:
/// - **I**: Cyan, 4-long bar
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Display color of locked and falling cells of this kind
    pub fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 255, 255),
            PieceKind::J => Rgb::new(0, 0, 255),
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::O => Rgb::new(255, 255, 0),
            PieceKind::S => Rgb::new(0, 255, 0),
            PieceKind::T => Rgb::new(128, 0, 128),
            PieceKind::Z => Rgb::new(255, 0, 0),
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell; its color comes from the kind
pub type Cell = Option<PieceKind>;

/// Logical player actions
///
/// Produced by the input layer from key events and folded into an
/// [`InputFrame`] once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Advance to the next rotation state
    Rotate,
    /// Speed up gravity while held
    SoftDrop,
    /// Drop to the lowest valid row and lock
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Leave the game
    Quit,
}

/// Input sampled for a single simulation tick.
///
/// Everything except `soft_drop` is a one-shot flag: the session applies it
/// at most once and the input layer clears it after handing the frame over.
/// `soft_drop` is the held level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub rotate: bool,
    pub hard_drop: bool,
    pub pause: bool,
    pub soft_drop: bool,
}

impl InputFrame {
    /// Frame with no input at all.
    pub const IDLE: InputFrame = InputFrame {
        move_left: false,
        move_right: false,
        rotate: false,
        hard_drop: false,
        pause: false,
        soft_drop: false,
    };

    /// Frame carrying a single one-shot action (or held soft drop).
    ///
    /// `Quit` is not a session input and yields an idle frame.
    pub fn with(action: GameAction) -> Self {
        let mut frame = Self::IDLE;
        frame.set(action);
        frame
    }

    /// Latch `action` into this frame.
    pub fn set(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left = true,
            GameAction::MoveRight => self.move_right = true,
            GameAction::Rotate => self.rotate = true,
            GameAction::SoftDrop => self.soft_drop = true,
            GameAction::HardDrop => self.hard_drop = true,
            GameAction::Pause => self.pause = true,
            GameAction::Quit => {}
        }
    }

    /// True when no flag is set.
    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}
