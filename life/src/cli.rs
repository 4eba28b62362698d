use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{ArgAction, Parser};
use libgame::config::Config;

#[derive(Parser, Debug)]
#[command(name = "life")]
#[command(about = "Run Conway's Game of Life on a fixed-size board loaded from a pattern file")]
pub struct Args {
    /// Number of rows in the world [default: 10]
    pub rows: Option<usize>,

    /// Number of columns in the world [default: 10]
    pub cols: Option<usize>,

    /// Pattern file, one line per row, '*' marks a live cell [default: life.txt]
    pub filename: Option<PathBuf>,

    /// Number of generations to simulate after the initial one [default: 10]
    pub generations: Option<usize>,

    /// JSON config file. Positional arguments override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Milliseconds to wait between printed generations
    #[arg(long, default_value_t = 0)]
    pub delay: u64,

    /// Clear the terminal before every generation
    #[arg(long)]
    pub clear: bool,

    /// Print the live cell count under every generation
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    /// Resolves the run configuration: defaults, then the config file, then positional arguments.
    pub fn to_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Couldn't load config '{}'", path.display()))?,
            None => Config::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(filename) = &self.filename {
            config.filename = filename.clone();
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }

        config.validate()?;
        Ok(config)
    }
}
