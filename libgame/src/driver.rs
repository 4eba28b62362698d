use std::io;

use log::{debug, info};

use super::{
    Game,
    board::{GameBoard, TileState},
    config::Config,
    error::Result,
    loader,
};

/// Receives every generation of a run, in order, starting at generation 0.
pub trait Emitter {
    fn emit(&mut self, board: &GameBoard, generation: usize) -> io::Result<()>;
}

impl<F> Emitter for F
where
    F: FnMut(&GameBoard, usize) -> io::Result<()>,
{
    fn emit(&mut self, board: &GameBoard, generation: usize) -> io::Result<()> {
        self(board, generation)
    }
}

// Stepping can't fail, only the emitter can.
pub fn run<E>(game: &mut Game, generations: usize, emitter: &mut E) -> io::Result<()>
where
    E: Emitter + ?Sized,
{
    for generation in 0..=generations {
        emitter.emit(game.board(), generation)?;

        if generation < generations {
            game.tick();
        }
    }

    Ok(())
}

pub fn simulate<E>(config: &Config, emitter: &mut E) -> Result<GameBoard>
where
    E: Emitter + ?Sized,
{
    config.validate()?;

    let board = loader::load_world_file(&config.filename, config.rows, config.cols)?;
    info!(
        "Simulating {} generation(s) of a {}x{} world from '{}'",
        config.generations,
        config.rows,
        config.cols,
        config.filename.display()
    );

    let mut game = Game::new(board)?;
    run(&mut game, config.generations, emitter)?;

    debug!(
        "Finished with {} alive cell(s)",
        game.board().count_cells(TileState::Alive)
    );

    Ok(game.into_board())
}
