//! Terminal Tetris runner.
//!
//! Reads input with crossterm, ticks the engine on a fixed interval and
//! draws through the framebuffer renderer.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};

use tick_tetris::core::{GameEngine, GameSnapshot};
use tick_tetris::input::{handle_key_event, is_actionable, should_quit};
use tick_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tick_tetris::types::GameAction;
use tick_tetris::{EventLog, EventRecord, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();

    let mut startup_warning = None;
    let mut log = match config.log_path.as_deref() {
        Some(path) => EventLog::open(path).unwrap_or_else(|e| {
            startup_warning = Some(format!("{e:#}"));
            EventLog::disabled()
        }),
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state before reporting anything.
    let _ = term.exit();

    if let Some(msg) = startup_warning.or_else(|| log.take_failure()) {
        eprintln!("[EventLog] disabled: {msg}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<()> {
    let mut engine = GameEngine::new(config.seed);
    log.record(&EventRecord::start(&engine, config.tick_ms));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick = config.tick_interval();
    let mut last_tick = Instant::now();
    let mut paused = false;
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            engine.snapshot_into(&mut snap);
            view.render_into(&snap, paused, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let ticking = !paused && !engine.is_game_over();

        // Wait for input until the next tick is due.
        let timeout = if ticking {
            tick.saturating_sub(last_tick.elapsed())
        } else {
            tick
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(key.kind) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Pause) => {
                            if !engine.is_game_over() {
                                paused = !paused;
                                last_tick = Instant::now();
                                dirty = true;
                            }
                        }
                        Some(GameAction::Restart) => {
                            engine.restart();
                            log.record(&EventRecord::restart(&engine));
                            paused = false;
                            last_tick = Instant::now();
                            dirty = true;
                        }
                        Some(action) if !paused => {
                            dirty |= engine.apply_action(action);
                        }
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if ticking && last_tick.elapsed() >= tick {
            last_tick = Instant::now();

            let piece = engine.active().kind();
            let result = engine.tick();
            if result.locked {
                log.record(&EventRecord::lock(&engine, piece, &result));
            }
            if result.game_over {
                log.record(&EventRecord::game_over(&engine));
            }
            dirty = true;
        }
    }
}
