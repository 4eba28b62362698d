use std::{
    io::{self, Write},
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use libgame::{
    board::{GameBoard, TileState},
    driver::Emitter,
    pattern::write_pattern,
};

use crate::sleeper::Sleeper;

const SEPARATOR: &str = "================================";

/// Renders each generation as text, optionally clearing the screen and pacing frames.
pub struct TerminalPrinter<W> {
    out: W,
    clear: bool,
    stats: bool,
    sleeper: Option<Sleeper>,
}

impl<W> TerminalPrinter<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear: false,
            stats: false,
            sleeper: None,
        }
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn with_stats(mut self, stats: bool) -> Self {
        self.stats = stats;
        self
    }

    /// Keeps at least `delay` between frames. A zero delay disables pacing.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.sleeper = (!delay.is_zero()).then(|| Sleeper::new(delay));
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> Emitter for TerminalPrinter<W>
where
    W: Write,
{
    fn emit(&mut self, board: &GameBoard, generation: usize) -> io::Result<()> {
        if let Some(sleeper) = &mut self.sleeper {
            sleeper.sleep();
        }

        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        writeln!(self.out, "Generation {generation}:")?;
        write_pattern(board, &mut self.out, TileState::DEAD_CHAR)?;

        if self.stats {
            writeln!(
                self.out,
                "Alive: {}/{}",
                board.count_cells(TileState::Alive),
                board.rows() * board.cols()
            )?;
        }

        writeln!(self.out, "{SEPARATOR}")?;
        self.out.flush()
    }
}
