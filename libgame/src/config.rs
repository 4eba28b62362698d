use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Settings for a single simulation run. Built once up front and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,

    /// Pattern file the initial world is loaded from.
    pub filename: PathBuf,

    /// Number of generations to advance. Generation 0 is always emitted, so a
    /// run emits `generations + 1` boards.
    pub generations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            filename: PathBuf::from("life.txt"),
            generations: 10,
        }
    }
}

impl Config {
    pub fn new<P>(rows: usize, cols: usize, filename: P, generations: usize) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let config = Self {
            rows,
            cols,
            filename: filename.into(),
            generations,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config. Missing fields fall back to [`Config::default`].
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let config_serialized = fs::read(path).map_err(|source| GameError::ConfigFile {
            path: path.to_owned(),
            source,
        })?;

        let config: Self = serde_json::from_slice(&config_serialized)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("rows", self.rows), ("columns", self.cols)] {
            if value < 1 {
                return Err(GameError::InvalidDimension { field, value });
            }
        }

        Ok(())
    }
}
