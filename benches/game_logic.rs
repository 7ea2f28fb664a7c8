use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameSnapshot, Piece, Session};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, InputFrame, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.game_over() {
                session = Session::new(12345);
            }
            session.tick(black_box(InputFrame::IDLE), Duration::from_millis(16));
        })
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    let mut session = Session::new(7);
    let drop = InputFrame::with(GameAction::HardDrop);

    c.bench_function("hard_drop_lock_spawn", |b| {
        b.iter(|| {
            if session.game_over() {
                session = Session::new(7);
            }
            black_box(session.tick(drop, Duration::ZERO));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full = Board::from_rows(&[
        "J.........",
        "IIIIIIIIII",
        "IIIIIIIIII",
        ".L........",
        "IIIIIIIIII",
        "IIIIIIIIII",
    ]);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = full.clone();
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_validity(c: &mut Criterion) {
    let board = Board::from_rows(&["ZZZZ..ZZZZ", "ZZZ..ZZZZZ"]);
    let piece = Piece::spawn(PieceKind::S);

    c.bench_function("is_valid_position", |b| {
        b.iter(|| {
            for y in -2..20 {
                black_box(board.is_valid_position(&piece, black_box(3), y));
            }
        })
    });
}

fn bench_rotate_with_kicks(c: &mut Criterion) {
    let board = Board::new();
    // Against the right wall every turn to horizontal needs a kick.
    let start = Piece::new(PieceKind::I, 1, 7, 5);

    c.bench_function("rotate_with_kicks", |b| {
        b.iter(|| {
            let mut piece = black_box(start);
            piece.rotate(&board);
            black_box(piece)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = Session::new(3);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop_cycle,
    bench_line_clear,
    bench_validity,
    bench_rotate_with_kicks,
    bench_render
);
criterion_main!(benches);
