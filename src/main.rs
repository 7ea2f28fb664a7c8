//! Terminal blockfall runner.
//!
//! Polls crossterm key events between fixed frame ticks. Each tick feeds the
//! latched input to the session and redraws through the diffing framebuffer
//! renderer. The run ends on the tick that tops out.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSnapshot, Session};
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let restored = term.exit();

    if let Ok(Some(score)) = result {
        println!("Game Over! Score: {score}");
    }
    result.and(restored)
}

/// Runs until the player quits or the game tops out. Returns the final score
/// in the latter case.
fn run(term: &mut TerminalRenderer) -> Result<Option<u32>> {
    let mut session = Session::new(rand::random());
    let mut input = InputHandler::new().with_key_releases(term.reports_key_releases());

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = current_viewport();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    session.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);
    term.draw_swap(&mut fb)?;

    loop {
        // Events only latch input; the screen changes on the tick boundary.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        return Ok(None);
                    }
                    match key.kind {
                        KeyEventKind::Press => {
                            input.handle_key_press(key.code);
                        }
                        KeyEventKind::Repeat => input.handle_key_repeat(key.code),
                        KeyEventKind::Release => input.handle_key_release(key.code),
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed < tick {
            continue;
        }
        last_tick = Instant::now();
        let frame = input.update(elapsed.as_millis().min(u32::MAX as u128) as u32);
        session.tick(frame, elapsed);

        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if session.game_over() {
            return Ok(Some(session.score()));
        }
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
