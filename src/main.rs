//! Terminal typefall runner (default binary).
//!
//! Words fall from the top of the screen; type them before they cross the
//! danger line. Uses crossterm for input and a framebuffer-based diff
//! renderer (no widget toolkit).

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_typefall::core::{GameSnapshot, GameState};
use tui_typefall::input::{should_quit, FrameCollector};
use tui_typefall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_typefall::types::TICK_MS;

const USAGE: &str = "usage: tui-typefall [--seed N]";

fn main() -> Result<()> {
    let seed = parse_args()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut collector = FrameCollector::default();

    // Reused across frames so the steady-state loop stays allocation-free.
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        collector.key_press(key.code);
                    }
                    KeyEventKind::Repeat => collector.key_repeat(key.code),
                    KeyEventKind::Release => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(&collector.take_frame());
        }
    }
}

fn parse_args() -> Result<u32> {
    let mut args = std::env::args().skip(1);
    let mut seed = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid seed {value:?}"))?,
                );
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        }
    }

    Ok(seed.unwrap_or_else(seed_from_clock))
}

/// Seed for casual play when `--seed` is not given.
fn seed_from_clock() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
