use itertools::Itertools;
use rand::Rng;

use super::{
    error::{GameError, Result},
    pos::Position,
};

const BORDER: usize = 1;

/// A fixed-size board with a one-cell dead border on every side.
///
/// The border lets neighbour lookups at the edges of the live region index
/// straight into the buffer without any bounds checks. Cells are stored
/// row-major in a single buffer of `(rows + 2) * (cols + 2)` tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    rows: usize,
    cols: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(rows: usize, cols: usize) -> Self {
        let tiles = vec![TileState::Dead; (rows + 2 * BORDER) * (cols + 2 * BORDER)];
        Self { rows, cols, tiles }
    }

    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_add(2 * BORDER)
            .zip(cols.checked_add(2 * BORDER))
            .and_then(|(padded_rows, padded_cols)| padded_rows.checked_mul(padded_cols))
            .ok_or(GameError::GridTooLarge { rows, cols })?;

        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(len)
            .map_err(|source| GameError::Allocation { rows, cols, source })?;
        tiles.resize(len, TileState::Dead);

        Ok(Self { rows, cols, tiles })
    }

    /// Only the live region is filled, the border stays dead.
    pub fn filled(rows: usize, cols: usize, fill: TileState) -> Result<Self> {
        let mut board = Self::try_new(rows, cols)?;

        if fill == TileState::Alive {
            for pos in live_positions(rows, cols) {
                board.set_tile(pos, fill);
            }
        }

        Ok(board)
    }

    pub fn new_random<R>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&alive_probability) {
            panic!("Alive probability must be within 0..=1, got {alive_probability}");
        }

        let mut board = Self::try_new(rows, cols)?;

        for pos in live_positions(rows, cols) {
            if rng.random_bool(alive_probability) {
                board.set_tile(pos, TileState::Alive);
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile<P>(&self, pos: P) -> TileState
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        match self.pos_to_index(pos) {
            Some(index) => self.tiles[index],
            None => self.out_of_bounds(pos),
        }
    }

    pub fn set_tile<P>(&mut self, pos: P, state: TileState)
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let Some(index) = self.pos_to_index(pos) else {
            self.out_of_bounds(pos)
        };

        if state == TileState::Alive && !self.is_live(pos) {
            panic!("Border cell {pos:?} must stay dead");
        }

        self.tiles[index] = state;
    }

    pub fn is_live(&self, pos: Position) -> bool {
        (BORDER..=self.rows).contains(&pos.row) && (BORDER..=self.cols).contains(&pos.col)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, TileState)> + '_ {
        live_positions(self.rows, self.cols).map(|pos| (pos, self.tile(pos)))
    }

    pub fn live_positions(&self) -> impl Iterator<Item = Position> + use<> {
        live_positions(self.rows, self.cols)
    }

    pub fn alive_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.enumerate_tiles()
            .filter(|(_, tile)| *tile == TileState::Alive)
            .map(|(pos, _)| pos)
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.enumerate_tiles()
            .filter(|(_, tile)| *tile == state)
            .count()
    }

    pub fn border_is_dead(&self) -> bool {
        self.border_positions()
            .all(|pos| self.tile(pos) == TileState::Dead)
    }

    fn border_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let last_row = self.rows + BORDER;
        let last_col = self.cols + BORDER;

        let horizontal = [0, last_row]
            .into_iter()
            .cartesian_product(0..=last_col);
        let vertical = (BORDER..=self.rows).cartesian_product([0, last_col]);

        horizontal.chain(vertical).map(Position::from)
    }

    pub fn copy_from(&mut self, other: &GameBoard) {
        if (self.rows, self.cols) != (other.rows, other.cols) {
            panic!(
                "Can't copy a {}x{} board into a {}x{} board",
                other.rows, other.cols, self.rows, self.cols
            );
        }

        self.tiles.copy_from_slice(&other.tiles);
    }

    fn pos_to_index(&self, pos: Position) -> Option<usize> {
        let Position { row, col } = pos;

        if row > self.rows + BORDER {
            return None;
        }

        if col > self.cols + BORDER {
            return None;
        }

        Some(col + row * (self.cols + 2 * BORDER))
    }

    fn out_of_bounds(&self, pos: Position) -> ! {
        panic!(
            "{pos:?} is outside of a {}x{} board (border included)",
            self.rows + 2 * BORDER,
            self.cols + 2 * BORDER
        )
    }
}

fn live_positions(rows: usize, cols: usize) -> impl Iterator<Item = Position> {
    (BORDER..=rows)
        .cartesian_product(BORDER..=cols)
        .map(Position::from)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub const ALIVE_CHAR: char = '*';
    pub const DEAD_CHAR: char = '-';

    pub fn from_byte(byte: u8) -> Self {
        if byte == Self::ALIVE_CHAR as u8 {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }

    pub fn as_char(self) -> char {
        match self {
            TileState::Alive => Self::ALIVE_CHAR,
            TileState::Dead => Self::DEAD_CHAR,
        }
    }
}
