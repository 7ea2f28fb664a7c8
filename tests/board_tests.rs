//! Board tests - grid access, validity, locking and line clearing

use blockfall::core::{Board, Piece};
use blockfall::types::{PieceKind, COLUMNS, ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), COLUMNS);
    assert_eq!(board.height(), ROWS);

    for y in 0..ROWS as i8 {
        for x in 0..COLUMNS as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(COLUMNS as i8, 0), None);
    assert_eq!(board.get(0, ROWS as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, ROWS as i8, Some(PieceKind::T)));
}

#[test]
fn test_valid_position_rejects_walls_and_floor() {
    let board = Board::new();
    let o = Piece::spawn(PieceKind::O);

    assert!(board.is_valid_position(&o, 0, 0));
    assert!(board.is_valid_position(&o, 8, 18));
    assert!(!board.is_valid_position(&o, -1, 0));
    assert!(!board.is_valid_position(&o, 9, 0));
    assert!(!board.is_valid_position(&o, 0, 19));
}

#[test]
fn test_valid_position_allows_rows_above_board() {
    let board = Board::from_rows(&["##########"]);
    let i = Piece::new(PieceKind::I, 1, 0, 0);
    // Vertical I with its whole column above the top row.
    assert!(board.is_valid_position(&i, 0, -4));
    assert!(board.is_valid_position(&i, 0, -2));
    // Even above the board, columns still apply.
    assert!(!board.is_valid_position(&i, 8, -4));
}

#[test]
fn test_valid_position_detects_collision() {
    let mut board = Board::new();
    board.set(4, 1, Some(PieceKind::Z));
    let o = Piece::spawn(PieceKind::O);
    assert!(!board.is_valid_position(&o, 4, 0));
    assert!(!board.is_valid_position(&o, 3, 0));
    assert!(board.is_valid_position(&o, 5, 0));
}

#[test]
fn test_lock_writes_kind() {
    let mut board = Board::new();
    let t = Piece::new(PieceKind::T, 0, 3, 18);
    board.lock(&t);

    assert_eq!(board.get(4, 18), Some(Some(PieceKind::T)));
    for x in 3..6 {
        assert_eq!(board.get(x, 19), Some(Some(PieceKind::T)));
    }
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_lock_skips_cells_above_board() {
    let mut board = Board::new();
    let i = Piece::new(PieceKind::I, 1, 0, -3);
    board.lock(&i);

    // Only the bottom cell of the vertical I is on the board.
    assert_eq!(board.get(2, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_clear_single_line() {
    let mut board = Board::from_rows(&[
        "..T.......",
        "ZZZZZZZZZZ",
    ]);
    assert!(board.is_row_full(19));
    assert_eq!(board.clear_full_lines(), 1);
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_clear_preserves_order_of_survivors() {
    let mut board = Board::from_rows(&[
        "J.........",
        "##########",
        ".L........",
        "##########",
        "..S.......",
    ]);
    assert_eq!(board.clear_full_lines(), 2);

    assert_eq!(board.get(0, 17), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 18), Some(Some(PieceKind::L)));
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
    for y in 0..17 {
        assert!(board.rows().nth(y).unwrap().iter().all(|c| c.is_none()));
    }
}

#[test]
fn test_clear_with_no_full_rows_is_noop() {
    let mut board = Board::from_rows(&["#########.", "O........O"]);
    let before = board.clone();
    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_whole_board() {
    let rows = ["IIIIIIIIII"; 20];
    let mut board = Board::from_rows(&rows);
    assert_eq!(board.clear_full_lines(), 20);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_from_rows_is_bottom_aligned() {
    let board = Board::from_rows(&["T........Z"]);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(0, 18), Some(None));
}
