//! Terminal runner (default binary).
//!
//! Folds keyboard and gravity actions over the game state and draws every frame with
//! the framebuffer renderer.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use blockfall::core::GameState;
use blockfall::input::{should_quit, Gravity, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::Action;

/// Frame interval (~60 FPS).
const FRAME_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence. The same seed and the same inputs replay the same
    /// game. Defaults to a seed taken from the clock.
    #[arg(short, long)]
    seed: Option<u32>,
    /// Write logs to this file. Nothing is logged otherwise, since the terminal is
    /// busy drawing the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log verbosity: -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    // Restore the terminal before the panic message is printed, or it is lost.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::ExecutableCommand::execute(
            &mut io::stderr(),
            crossterm::terminal::LeaveAlternateScreen,
        );
        let _ = crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::cursor::Show);
        eprint!("{panic_info}\n\n");
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, args.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: Option<u32>) -> Result<()> {
    let mut state = match seed {
        Some(seed) => GameState::new(seed),
        None => GameState::with_clock_seed(),
    };
    info!(seed = state.rng().seed(), "session started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut input = InputHandler::new();
    let mut gravity = Gravity::new();

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&state.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = state.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = input.handle_key_press(key) {
                        if action == Action::Restart {
                            gravity.reset();
                        }
                        state = state.apply(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);

            input.update(elapsed_ms);
            for _ in 0..gravity.update(elapsed_ms, state.level()) {
                state = state.apply(Action::DOWN);
            }
        }
    }
}
