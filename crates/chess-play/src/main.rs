//! Two-player chess at the terminal.
//!
//! Players take turns typing squares (`e2`, or `6,4` as row,col) the way
//! they would click a board: select a piece, then click a highlighted
//! destination.

mod command;
mod config;
mod render;
mod session;

use clap::Parser;
use config::PlayConfig;
use session::{Reply, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Two-player chess on one terminal")]
struct Args {
    /// Configuration file (defaults to ./chess.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Draw the board from Black's side
    #[arg(long)]
    flip: bool,

    /// Use FEN letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Hide file and rank labels
    #[arg(long)]
    no_coordinates: bool,

    /// Print a JSON snapshot of the game after each command
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = PlayConfig::load(args.config.as_deref())?;

    if args.flip {
        config.display.flip = true;
    }
    if args.ascii {
        config.display.unicode = false;
    }
    if args.no_coordinates {
        config.display.coordinates = false;
    }
    let level = config.log.level_or(args.log_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .with_writer(io::stderr)
        .init();
    tracing::info!(?config, "starting chess-play");

    let mut session = Session::new(config.display, args.json);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.screen())?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle_line(&line) {
            Reply::Quit => break,
            Reply::Show(text) => writeln!(stdout, "{}", text)?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    tracing::info!(plies = session.game().state().ply_count(), "exiting");
    Ok(())
}
