mod command;
mod config;
mod render;

use anyhow::Context;
use clap::Parser;
use command::{Command, HINT};
use config::{CliConfig, GlyphStyle};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tapchess_core::Color;
use tapchess_engine::{Board, ChessEngine};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tapchess")]
#[command(about = "Two-player chess played by tapping squares")]
struct Cli {
    /// Path to a TOML config file (defaults to ./tapchess.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Draw pieces as letters instead of chess symbols
    #[arg(long)]
    ascii: bool,
    /// Start from a piece placement such as "4k3/8/8/8/8/8/8/4K2R"
    #[arg(short, long)]
    position: Option<String>,
    /// Give Black the first move of a --position game
    #[arg(long, requires = "position")]
    black_to_move: bool,
    /// Print each state as a JSON line instead of drawing the board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.ascii {
        config.glyphs = GlyphStyle::Ascii;
    }

    let mut engine = match &cli.position {
        Some(placement) => {
            let board = Board::from_placement_str(placement)
                .with_context(|| format!("invalid --position {:?}", placement))?;
            let turn = if cli.black_to_move {
                Color::Black
            } else {
                Color::White
            };
            ChessEngine::from_board(board, turn, config.engine)
        }
        None => ChessEngine::with_config(config.engine),
    };
    tracing::info!(en_passant = ?config.engine.en_passant, "game started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    show(&mut out, &engine, &config, cli.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        match Command::parse(&line) {
            Some(Command::Tap { row, col }) => engine.select_or_move(row, col),
            Some(Command::Reset) => engine.reset(),
            Some(Command::Quit) => break,
            None => {
                writeln!(out, "{}", HINT)?;
                continue;
            }
        }
        show(&mut out, &engine, &config, cli.json)?;
    }

    Ok(())
}

fn show(
    out: &mut impl Write,
    engine: &ChessEngine,
    config: &CliConfig,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let line = serde_json::to_string(&engine.snapshot())?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", render::render(engine, config.glyphs))?;
    }
    out.flush()?;
    Ok(())
}
