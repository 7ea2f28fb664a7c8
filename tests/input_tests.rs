//! Input pipeline tests - key map, latching handler and session together

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blockfall::core::{Board, Piece, Session};
use blockfall::input::{action_for_key, handle_key_event, should_quit, InputHandler};
use blockfall::types::{GameAction, PieceKind, TICK_MS};

const FRAME: Duration = Duration::from_millis(TICK_MS as u64);

fn session_with(kind: PieceKind) -> Session {
    Session::with_board(Board::new(), Piece::spawn(kind), PieceKind::O, 1)
}

#[test]
fn test_fixed_key_map() {
    let cases = [
        (KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Char('a'), GameAction::MoveLeft),
        (KeyCode::Right, GameAction::MoveRight),
        (KeyCode::Char('d'), GameAction::MoveRight),
        (KeyCode::Up, GameAction::Rotate),
        (KeyCode::Char('x'), GameAction::Rotate),
        (KeyCode::Char('w'), GameAction::Rotate),
        (KeyCode::Down, GameAction::SoftDrop),
        (KeyCode::Char('s'), GameAction::SoftDrop),
        (KeyCode::Char(' '), GameAction::HardDrop),
        (KeyCode::Char('p'), GameAction::Pause),
        (KeyCode::Char('q'), GameAction::Quit),
        (KeyCode::Esc, GameAction::Quit),
    ];
    for (code, action) in cases {
        assert_eq!(action_for_key(code), Some(action), "{code:?}");
    }
    assert_eq!(action_for_key(KeyCode::Enter), None);
    assert_eq!(action_for_key(KeyCode::Char('z')), None);
}

#[test]
fn test_ctrl_c_quits() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(ctrl_c));
    assert_eq!(handle_key_event(ctrl_c), Some(GameAction::Quit));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}

#[test]
fn test_tap_moves_piece_once() {
    let mut session = session_with(PieceKind::T);
    let mut input = InputHandler::new();
    let x = session.current().x();

    input.handle_key_press(KeyCode::Left);
    session.tick(input.update(TICK_MS), FRAME);
    session.tick(input.update(TICK_MS), FRAME);

    assert_eq!(session.current().x(), x - 1);
}

#[test]
fn test_two_presses_before_tick_latch_once() {
    let mut session = session_with(PieceKind::T);
    let mut input = InputHandler::new();
    let x = session.current().x();

    input.handle_key_press(KeyCode::Right);
    input.handle_key_press(KeyCode::Right);
    session.tick(input.update(TICK_MS), FRAME);

    assert_eq!(session.current().x(), x + 1);
}

#[test]
fn test_pause_key_toggles_session() {
    let mut session = session_with(PieceKind::I);
    let mut input = InputHandler::new();

    input.handle_key_press(KeyCode::Char('p'));
    session.tick(input.update(TICK_MS), FRAME);
    assert!(session.paused());

    input.handle_key_press(KeyCode::Char('p'));
    session.tick(input.update(TICK_MS), FRAME);
    assert!(!session.paused());
}

#[test]
fn test_held_soft_drop_speeds_up_fall() {
    let mut session = session_with(PieceKind::O);
    let mut input = InputHandler::new();

    input.handle_key_press(KeyCode::Down);
    // Key repeat keeps the hold alive on terminals without releases.
    for _ in 0..7 {
        input.handle_key_repeat(KeyCode::Down);
        session.tick(input.update(TICK_MS), FRAME);
    }
    // 7 * 16ms = 112ms >= 100ms soft drop interval.
    assert_eq!(session.current().y(), 1);
}

#[test]
fn test_hard_drop_key_locks_piece() {
    let mut session = session_with(PieceKind::I);
    let mut input = InputHandler::new();

    input.handle_key_press(KeyCode::Char(' '));
    let event = session.tick(input.update(TICK_MS), FRAME);

    assert!(event.is_some());
    assert_eq!(session.current().kind(), PieceKind::O);
    assert_eq!(session.board().get(3, 19), Some(Some(PieceKind::I)));
}
