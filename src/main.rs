//! Terminal Swiftris runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `swiftris::term`.
//!
//! Usage: `swiftris [--seed <u32>]`
//!
//! Board size and scoring come from `SWIFTRIS_*` environment variables (see
//! `GameConfig::from_env`). Set `SWIFTRIS_LOG=<file>` to write logs to a file; the
//! level comes from `SWIFTRIS_LOG_LEVEL` (default `info`).

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use swiftris::core::{GameConfig, GameLoop};
use swiftris::input::{handle_key_event, should_quit};
use swiftris::term::{FrameBuffer, GameView, Hud, StatusView, TerminalRenderer, Viewport};
use swiftris::types::FRAME_MS;

const USAGE: &str = "\
usage: swiftris [--seed <u32>]

keys:
  left/right, a/d, h/l   move
  up, w, k, x            rotate clockwise
  z, y                   rotate counter-clockwise
  down, s, j             soft drop
  space, enter           hard drop
  p, esc                 pause
  r                      restart
  q, ctrl-c              quit";

fn main() -> Result<()> {
    let Some(seed) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    init_logging()?;

    let config = GameConfig::from_env();
    config.validate().context("invalid SWIFTRIS_* configuration")?;
    info!(seed, ?config, "starting swiftris");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Returns the seed to play with, or `None` when help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<u32>> {
    let mut seed = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--seed" => {
                let value = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                let parsed = value
                    .parse()
                    .with_context(|| format!("invalid seed: {value}"))?;
                seed = Some(parsed);
            }
            other => bail!("unknown argument: {other}\n\n{USAGE}"),
        }
    }
    Ok(Some(seed.unwrap_or_else(clock_seed)))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Log to the file named by `SWIFTRIS_LOG`; stdout belongs to the game screen.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("SWIFTRIS_LOG") else {
        return Ok(());
    };
    let level = match std::env::var("SWIFTRIS_LOG_LEVEL") {
        Ok(value) => value
            .parse::<Level>()
            .map_err(|_| anyhow!("invalid SWIFTRIS_LOG_LEVEL: {value}"))?,
        Err(_) => Level::INFO,
    };
    let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    info!("Logging initialized at level: {}", level);
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u32) -> Result<()> {
    let hud = Rc::new(RefCell::new(Hud::new()));
    let mut game_loop = GameLoop::new(config, seed)?;
    game_loop.set_presenter(Box::new(Rc::clone(&hud)));
    game_loop.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        {
            let hud = hud.borrow();
            let status = StatusView::from_loop(&game_loop, hud.message());
            view.render_into(game_loop.game(), &status, Viewport::new(w, h), &mut fb);
        }
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(high_score = game_loop.high_score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_loop.apply(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game_loop.update(elapsed_ms);
            hud.borrow_mut().update(elapsed_ms);
        }
    }
}
