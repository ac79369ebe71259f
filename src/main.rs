//! Terminal blockfall runner (default binary).
//!
//! Frame loop: advance the simulation by the real elapsed time, render a
//! snapshot through the framebuffer renderer, then wait for input until the
//! next frame is due. Input is applied the moment it arrives.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{debug, info};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{should_quit, translate_event};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;
use blockfall::RunConfig;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to prepare terminal")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file only; stderr would scribble over the raw-mode screen.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    };
    info!("session start seed={:?}", config.seed);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let delta_ms = u32::try_from(now.duration_since(last_frame).as_millis()).unwrap_or(u32::MAX);
        if delta_ms > 0 {
            // Keep the sub-millisecond remainder for the next frame.
            last_frame += Duration::from_millis(u64::from(delta_ms));
            game.tick(delta_ms);
        }

        if let Some(lock) = game.take_last_event() {
            debug!(
                "lock kind={} lines={} awarded={}",
                lock.kind.as_str(),
                lock.lines_cleared,
                lock.score_awarded
            );
        }

        let (w, h) = term.size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            // Drain everything already queued so bursts of keys are not
            // spread across frames.
            loop {
                let ev = event::read()?;
                match &ev {
                    Event::Key(key) if should_quit(*key) => {
                        info!("quit score={} lines={}", game.score(), game.lines());
                        return Ok(());
                    }
                    Event::Resize(_, _) => term.invalidate(),
                    _ => {}
                }
                if let Some(action) = translate_event(&ev, game.phase()) {
                    game.apply_action(action);
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}
