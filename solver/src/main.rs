use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use chromate::format::parse_dimensions;
use chromate::solver::Solver;
use chromate::Board;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Solve a Flow Free board.
///
/// The board is read one row per line, cells separated by spaces:
/// `0` for an empty cell, `N+` for a receiver of color N, `N-` for a path segment of color N.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Board file; reads standard input when absent or `-`.
    input: Option<PathBuf>,

    /// Expected board size as WIDTHxHEIGHT, e.g. `5x2`.
    #[arg(long)]
    size: Option<String>,

    /// Print search statistics after the board.
    #[arg(long)]
    stats: bool,

    /// Log more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Returns whether a solution was found.
fn run(args: &Args) -> anyhow::Result<bool> {
    let text = read_input(args.input.as_ref())?;
    let board = match &args.size {
        Some(size) => Board::parse_with_dimensions(&text, parse_dimensions(size)?)?,
        None => text.parse::<Board>()?,
    };
    tracing::info!(width = board.width(), height = board.height(), "read board");

    let started = Instant::now();
    let solution = Solver::new(&board).run();
    let elapsed = started.elapsed();

    match &solution.board {
        Some(solved) => print!("{solved}"),
        None => println!("no solution"),
    }

    if args.stats {
        for (color, count) in &solution.stats.candidates {
            println!("color {color}: {count} candidate paths");
        }
        println!("paths expanded: {}", solution.stats.paths_expanded);
        println!("boards expanded: {}", solution.stats.boards_expanded);
        println!("boards seen: {}", solution.stats.boards_seen);
        println!("time taken: {} milliseconds", elapsed.as_millis());
    }

    Ok(solution.board.is_some())
}
