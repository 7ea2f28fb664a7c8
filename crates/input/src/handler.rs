//! Per-tick input latch for terminal environments.
//!
//! Presses of move/rotate/hard-drop/pause are latched as one-shot flags and
//! handed to the session once; `update` clears them. Soft drop is a held
//! level. Terminals that never report key releases get a short timeout on
//! the held soft drop instead.

use crossterm::event::KeyCode;

use crate::map::action_for_key;
use crate::types::{GameAction, InputFrame, SOFT_DROP_GRACE_MS};

/// Tracks pending one-shot actions and the held soft drop.
#[derive(Debug, Clone)]
pub struct InputHandler {
    pending: InputFrame,
    soft_drop_held: bool,
    /// Time left before an unreleased soft drop is treated as released.
    soft_drop_grace_ms: u32,
    key_release_timeout_ms: u32,
    /// Set once the terminal has delivered any release event.
    releases_reported: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_key_release_timeout_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_key_release_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            pending: InputFrame::IDLE,
            soft_drop_held: false,
            soft_drop_grace_ms: 0,
            key_release_timeout_ms: timeout_ms,
            releases_reported: false,
        }
    }

    /// Declare up front whether the terminal reports key releases.
    ///
    /// With releases reported, a held soft drop lasts until its release and
    /// the grace timeout never applies. Without it the handler still switches
    /// over on the first release event it sees.
    pub fn with_key_releases(mut self, reported: bool) -> Self {
        self.releases_reported = reported;
        self
    }

    /// Record a key press. Returns the mapped action, if any.
    ///
    /// `Quit` is returned but not latched; the caller owns shutdown.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = action_for_key(code)?;
        match action {
            GameAction::SoftDrop => {
                self.soft_drop_held = true;
                self.soft_drop_grace_ms = self.key_release_timeout_ms;
            }
            GameAction::Quit => {}
            other => self.pending.set(other),
        }
        Some(action)
    }

    /// Auto-repeat of a held key. Only keeps soft drop alive; no other
    /// action repeats.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if action_for_key(code) == Some(GameAction::SoftDrop) && self.soft_drop_held {
            self.soft_drop_grace_ms = self.key_release_timeout_ms;
        }
    }

    /// Record a key release.
    ///
    /// Releasing move or rotate before the next tick withdraws the press.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.releases_reported = true;
        match action_for_key(code) {
            Some(GameAction::MoveLeft) => self.pending.move_left = false,
            Some(GameAction::MoveRight) => self.pending.move_right = false,
            Some(GameAction::Rotate) => self.pending.rotate = false,
            Some(GameAction::SoftDrop) => {
                self.soft_drop_held = false;
                self.soft_drop_grace_ms = 0;
            }
            _ => {}
        }
    }

    /// Hand over this tick's input and clear the one-shot flags.
    pub fn update(&mut self, elapsed_ms: u32) -> InputFrame {
        let mut frame = std::mem::replace(&mut self.pending, InputFrame::IDLE);
        frame.soft_drop = self.soft_drop_held;

        // Auto-release when terminal does not emit release events.
        if self.soft_drop_held && !self.releases_reported {
            self.soft_drop_grace_ms = self.soft_drop_grace_ms.saturating_sub(elapsed_ms);
            if self.soft_drop_grace_ms == 0 {
                self.soft_drop_held = false;
            }
        }

        frame
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
