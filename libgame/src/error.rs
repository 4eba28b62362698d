use std::{collections::TryReserveError, io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid {field}: must be at least 1, got {value}")]
    InvalidDimension { field: &'static str, value: usize },

    #[error("Couldn't read config file '{}'", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't parse config: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    #[error("Couldn't open world file '{}'", path.display())]
    WorldFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("A {rows}x{cols} board doesn't fit in memory")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("Couldn't allocate a {rows}x{cols} board")]
    Allocation {
        rows: usize,
        cols: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
