use board::GameBoard;
use log::trace;

pub mod board;
pub mod config;
pub mod driver;
pub mod error;
pub mod loader;
pub mod pattern;
pub mod pos;
pub mod rule;

pub use error::{GameError, Result};

/// A board together with the scratch snapshot used to step it.
#[derive(Debug, Clone)]
pub struct Game {
    board: GameBoard,
    scratch: GameBoard,
    generation: usize,
}

impl Game {
    pub fn new(board: GameBoard) -> Result<Self> {
        let scratch = GameBoard::try_new(board.rows(), board.cols())?;

        Ok(Self {
            board,
            scratch,
            generation: 0,
        })
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn into_board(self) -> GameBoard {
        self.board
    }

    pub fn tick(&mut self) {
        advance(&mut self.board, &mut self.scratch);
        self.generation += 1;

        trace!("Advanced to generation {}", self.generation);
    }
}

/// Moves `world` one generation forward.
///
/// Every cell is computed from a copy of `world` taken into `scratch` before
/// any cell is written, so no cell sees a neighbour's next state.
///
/// # Panics
///
/// If `scratch` and `world` have different dimensions.
pub fn advance(world: &mut GameBoard, scratch: &mut GameBoard) {
    scratch.copy_from(world);

    for pos in world.live_positions() {
        world.set_tile(pos, rule::next_state(scratch, pos));
    }
}
