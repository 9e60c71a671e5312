//! Headless replay: fold an action script over a seeded game and print snapshots as
//! JSON lines.
//!
//! ```text
//! blockfall-replay --seed 7 --script moves.txt --trace
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::prelude::*;

use blockfall::core::GameState;
use blockfall::script::parse_script;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence.
    #[arg(short, long, default_value_t = 1)]
    seed: u32,
    /// Action script, one action per line. Reads stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print a snapshot after every action, not only the final one.
    #[arg(long)]
    trace: bool,
    /// Log verbosity on stderr: -v for info, -vv for debug, -vvv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();

    let text = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };
    let actions = parse_script(&text)?;
    info!(seed = args.seed, actions = actions.len(), "replaying");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut state = GameState::new(args.seed);
    if args.trace {
        write_snapshot(&mut out, &state)?;
    }
    for (step, action) in actions.into_iter().enumerate() {
        state = state.apply(action);
        debug!(step, action = action.as_str(), "applied");
        if args.trace {
            write_snapshot(&mut out, &state)?;
        }
    }
    if !args.trace {
        write_snapshot(&mut out, &state)?;
    }

    info!(
        score = state.score(),
        level = state.level(),
        game_ended = state.game_ended(),
        "done"
    );
    Ok(())
}

fn write_snapshot(out: &mut impl Write, state: &GameState) -> Result<()> {
    serde_json::to_writer(&mut *out, &state.snapshot()).context("failed to encode snapshot")?;
    writeln!(out)?;
    Ok(())
}
