//! Terminal presentation for blockfall.
//!
//! Renders a [`GameSnapshot`](core::GameSnapshot) into a framebuffer of
//! styled cells and flushes it with crossterm. Nothing here mutates game
//! state.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`game_view`]: board, side panel and overlays
//! - [`renderer`]: raw-mode terminal with diffed output

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
