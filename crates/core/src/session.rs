//! Session module - the game state machine
//!
//! This module ties together the board, pieces, randomizer and scoring. It
//! owns the current and next piece, the counters and the fall timer, and
//! advances everything one tick at a time from an [`InputFrame`].
//!
//! Within a tick the order is fixed: pause toggle, hard drop, left, right,
//! rotate, then the fall timer and at most one gravity step.

use std::time::Duration;

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceRandomizer;
use crate::scoring::{fall_interval, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, InputFrame, PieceKind, INITIAL_LEVEL};

/// Lifecycle of a session. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Paused,
    GameOver,
}

/// Outcome of locking a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_awarded: u32,
    /// The promoted next piece did not fit at its spawn position.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current: Piece,
    next: Piece,
    randomizer: PieceRandomizer,
    score: u32,
    lines: u32,
    level: u32,
    /// Time accumulated since the last gravity step.
    fall_timer: Duration,
    status: Status,
    /// Most recent lock (consumed by observers).
    last_lock: Option<LockEvent>,
}

impl Session {
    /// New session on an empty board with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let current = Piece::spawn(randomizer.next_kind());
        let next = randomizer.next_kind();
        Self::assemble(Board::new(), current, next, randomizer)
    }

    /// Session around a prepared board and current piece.
    ///
    /// If `current` does not fit where it is, the session starts in
    /// [`Status::GameOver`].
    pub fn with_board(board: Board, current: Piece, next: PieceKind, seed: u64) -> Self {
        Self::assemble(board, current, next, PieceRandomizer::new(seed))
    }

    fn assemble(board: Board, current: Piece, next: PieceKind, randomizer: PieceRandomizer) -> Self {
        let status = if board.is_valid_position(&current, current.x(), current.y()) {
            Status::Active
        } else {
            Status::GameOver
        };

        Self {
            board,
            current,
            next: Piece::spawn(next),
            randomizer,
            score: 0,
            lines: 0,
            level: INITIAL_LEVEL,
            fall_timer: Duration::ZERO,
            status,
            last_lock: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_timer(&self) -> Duration {
        self.fall_timer
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Gravity interval that applies right now.
    pub fn fall_interval(&self, soft_drop: bool) -> Duration {
        fall_interval(self.level, soft_drop)
    }

    /// Advance the simulation by one frame.
    ///
    /// Returns the lock that happened during this tick, if any (the later
    /// one when a hard drop and a gravity lock both land in the same tick).
    pub fn tick(&mut self, input: InputFrame, elapsed: Duration) -> Option<LockEvent> {
        if input.pause {
            self.apply_action(GameAction::Pause);
            return None;
        }
        if self.status != Status::Active {
            return None;
        }

        let mut locked = None;

        if input.hard_drop {
            locked = Some(self.hard_drop());
            if self.game_over() {
                return locked;
            }
        }
        if input.move_left {
            self.apply_action(GameAction::MoveLeft);
        }
        if input.move_right {
            self.apply_action(GameAction::MoveRight);
        }
        if input.rotate {
            self.apply_action(GameAction::Rotate);
        }

        self.fall_timer += elapsed;
        if self.fall_timer >= self.fall_interval(input.soft_drop) {
            self.fall_timer = Duration::ZERO;
            if let Some(event) = self.step_down() {
                locked = Some(event);
            }
        }

        locked
    }

    /// Apply a single command immediately.
    ///
    /// Returns whether the command changed anything. Soft drop is a held
    /// level read by [`Session::tick`] and quit belongs to the caller, so
    /// both are no-ops here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            _ if self.status != Status::Active => false,
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::Rotate => self.current.rotate(&self.board),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::SoftDrop | GameAction::Quit => false,
        }
    }

    /// Flip between Active and Paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            Status::Active => Status::Paused,
            Status::Paused => Status::Active,
            Status::GameOver => return false,
        };
        true
    }

    /// Check if piece can move by (dx, dy) from where it is
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        let p = &self.current;
        self.board.is_valid_position(p, p.x() + dx, p.y() + dy)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if self.can_move(dx, 0) {
            self.current.translate(dx, 0);
            true
        } else {
            false
        }
    }

    /// One gravity step: fall a row, or lock when blocked.
    fn step_down(&mut self) -> Option<LockEvent> {
        if self.can_move(0, 1) {
            self.current.translate(0, 1);
            None
        } else {
            Some(self.lock_and_spawn())
        }
    }

    /// Drop to the lowest valid row and lock right away.
    fn hard_drop(&mut self) -> LockEvent {
        while self.can_move(0, 1) {
            self.current.translate(0, 1);
        }
        self.lock_and_spawn()
    }

    /// Lock the current piece, clear lines, score, and promote the next piece
    fn lock_and_spawn(&mut self) -> LockEvent {
        self.board.lock(&self.current);

        let cleared = self.board.clear_full_lines() as u32;
        let awarded = line_clear_score(cleared);
        if cleared > 0 {
            self.score = self.score.saturating_add(awarded);
            self.lines += cleared;
            self.level = level_for_lines(self.lines);
        }

        self.current = self.next;
        self.next = Piece::spawn(self.randomizer.next_kind());

        let blocked = !self.can_move(0, 0);
        if blocked {
            self.status = Status::GameOver;
        }

        let event = LockEvent {
            lines_cleared: cleared,
            score_awarded: awarded,
            game_over: blocked,
        };
        self.last_lock = Some(event);
        event
    }

    /// Fill a render snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = if self.game_over() {
            None
        } else {
            Some(ActiveSnapshot::from(self.current))
        };
        out.next = self.next.kind();
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.paused = self.paused();
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
