//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and latches them
//! into one [`crate::types::InputFrame`] per tick, including on terminals
//! without key-release events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{action_for_key, handle_key_event, should_quit};
