//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every rule is reachable without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: Static catalog of rotation-state matrices per piece kind
//! - [`piece`]: The falling piece, occupancy queries, rotation with horizontal kicks
//! - [`board`]: 10x20 grid with validity testing, locking and line clearing
//! - [`scoring`]: Flat line score, level curve, fall intervals
//! - [`rng`]: Seeded uniform piece randomizer
//! - [`session`]: The Active / Paused / GameOver state machine driven per tick
//! - [`snapshot`]: Read-only render view of a session
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on each draw
//! - **Simple kicks**: a blocked rotation retries at -1, +1, -2, +2 columns
//! - **No lock delay**: a piece locks on the first gravity step it cannot fall
//! - **Scoring**: 100 points per cleared line, level = 1 + lines / 10
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use blockfall_core::Session;
//! use blockfall_types::{GameAction, InputFrame};
//!
//! let mut game = Session::new(12345);
//!
//! game.tick(InputFrame::with(GameAction::MoveRight), Duration::from_millis(16));
//! game.tick(InputFrame::with(GameAction::HardDrop), Duration::from_millis(16));
//!
//! assert!(game.board().cells().iter().any(|c| c.is_some()));
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! Call [`Session::tick`](session::Session::tick) once per frame with the
//! elapsed time. Gravity fires at most once per tick when the accumulated
//! time reaches the fall interval (0.5s at level 1).

pub mod board;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::{Piece, PieceCells};
pub use rng::PieceRandomizer;
pub use scoring::{fall_interval, level_for_lines, line_clear_score};
pub use session::{LockEvent, Session, Status};
pub use shapes::{shape, RotationState, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
