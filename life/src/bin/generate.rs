//! Writes a random starting pattern for `life`.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use colored::Colorize;
use libgame::{
    board::{GameBoard, TileState},
    pattern::write_pattern,
};
use life::logging;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Generate a random pattern file for life")]
struct Args {
    /// Number of rows in the pattern
    rows: usize,

    /// Number of columns in the pattern
    cols: usize,

    /// Where to write the pattern
    #[arg(long, short = 'o', default_value = "life.txt")]
    output: PathBuf,

    /// Probability of each cell starting alive
    #[arg(long, default_value_t = 0.05, value_parser = parse_probability)]
    density: f64,

    /// Random seed for reproducible patterns
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn parse_probability(arg: &str) -> Result<f64, String> {
    let value: f64 = arg.parse().map_err(|e| format!("{e}"))?;

    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not within 0..=1"))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("{} {e:?}", "!".bright_red());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.rows == 0 || args.cols == 0 {
        bail!("Pattern must have at least one row and one column");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let board = GameBoard::new_random(args.rows, args.cols, args.density, &mut rng)
        .with_context(|| format!("Couldn't generate a {}x{} pattern", args.rows, args.cols))?;

    let file = File::create(&args.output)
        .with_context(|| format!("Couldn't create '{}'", args.output.display()))?;
    let mut out = BufWriter::new(file);

    write_pattern(&board, &mut out, ' ')
        .and_then(|()| out.flush())
        .with_context(|| format!("Couldn't write '{}'", args.output.display()))?;

    info!(
        "Wrote {}x{} pattern with {} alive cell(s) to '{}'",
        args.rows,
        args.cols,
        board.count_cells(TileState::Alive),
        args.output.display()
    );

    Ok(())
}
