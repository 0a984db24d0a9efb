//! Terminal Tetris runner (default binary).
//!
//! Crossterm drives input and a framebuffer-based renderer draws the game.
//! Gravity and input polling are interleaved on a single thread.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use term_tetris::config::GameConfig;
use term_tetris::core::{GameSnapshot, GameState};
use term_tetris::input::{handle_key_event, is_interrupt, should_quit};
use term_tetris::logging;
use term_tetris::term::{FrameBuffer, GameView, TerminalRenderer};

/// How a session ended.
enum Outcome {
    Finished { score: u32, lines: u32, level: u32 },
    Interrupted,
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let _logger = logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config));

    // Restore the terminal before anything is printed or reported.
    let restored = term.exit();
    let outcome = result?;
    restored?;

    match outcome {
        Outcome::Finished {
            score,
            lines,
            level,
        } => {
            log::info!("session end: score={} lines={} level={}", score, lines, level);
            println!("╔════════════════════╗");
            println!("║     GAME OVER!     ║");
            println!("╚════════════════════╝");
            println!("Final Score: {}", score);
            println!("Lines Cleared: {}", lines);
            println!("Level Reached: {}", level);
            println!();
            println!("Thanks for playing!");
        }
        Outcome::Interrupted => {
            log::info!("session interrupted");
            println!("Game interrupted. Thanks for playing!");
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<Outcome> {
    let view = GameView::default();

    let mut splash = view.render_splash(term.viewport());
    term.draw_swap(&mut splash)?;
    loop {
        match next_key()? {
            Some(key) if is_interrupt(key) => return Ok(Outcome::Interrupted),
            Some(_) => break,
            None => {
                term.invalidate();
                let mut splash = view.render_splash(term.viewport());
                term.draw_swap(&mut splash)?;
            }
        }
    }

    let mut game = GameState::new(config.seed);
    log::info!(
        "session start: seed={} fall_ms={} poll_ms={}",
        game.seed(),
        config.base_fall_ms,
        config.poll_ms
    );
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let poll = Duration::from_millis(config.poll_ms as u64);
    let mut last_fall = Instant::now();

    while !game.game_over() {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, term.viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        if !game.paused() {
            let interval = Duration::from_millis(game.fall_interval_ms(config.base_fall_ms) as u64);
            if last_fall.elapsed() > interval {
                game.move_down();
                last_fall = Instant::now();
            }
        }

        if event::poll(poll)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if is_interrupt(key) {
                        return Ok(Outcome::Interrupted);
                    }
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if let Some(event) = game.take_last_event() {
            log::debug!(
                "lock: lines={} clear_score={} drop_bonus={} topped_out={}",
                event.lines_cleared,
                event.line_clear_score,
                event.drop_bonus,
                event.topped_out
            );
        }
    }

    if game.game_over() {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, term.viewport(), &mut fb);
        term.draw_swap(&mut fb)?;
        if is_interrupt(wait_for_key()?) {
            return Ok(Outcome::Interrupted);
        }
    }

    Ok(Outcome::Finished {
        score: game.score(),
        lines: game.lines(),
        level: game.level(),
    })
}

/// Block for the next event; `Some` for key presses, `None` for anything else.
fn next_key() -> Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn wait_for_key() -> Result<KeyEvent> {
    loop {
        if let Some(key) = next_key()? {
            return Ok(key);
        }
    }
}
