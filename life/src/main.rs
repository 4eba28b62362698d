use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use libgame::driver;
use life::{logging, printer::TerminalPrinter};

mod cli;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("{} {e:?}", "!".bright_red());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let config = args.to_config()?;

    let mut printer = TerminalPrinter::new(BufWriter::new(io::stdout().lock()))
        .with_clear(args.clear)
        .with_stats(args.stats)
        .with_delay(args.delay());

    driver::simulate(&config, &mut printer)
        .with_context(|| format!("Couldn't simulate '{}'", config.filename.display()))?;

    Ok(())
}
