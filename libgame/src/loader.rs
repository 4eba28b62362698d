use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::debug;

use super::{
    board::{GameBoard, TileState},
    error::{GameError, Result},
    pos::Position,
};

/// Lines past `rows` and bytes past `cols` are ignored, anything other than `*` is dead.
pub fn load_world<R>(mut source: R, rows: usize, cols: usize) -> Result<GameBoard>
where
    R: BufRead,
{
    let mut board = GameBoard::try_new(rows, cols)?;
    let mut lines_read = 0;

    for row in 1..=rows {
        if !read_row(&mut source, &mut board, row)? {
            break;
        }
        lines_read += 1;
    }

    debug!(
        "Loaded {rows}x{cols} world from {lines_read} line(s), {} alive",
        board.count_cells(TileState::Alive)
    );

    Ok(board)
}

// Consumes one line straight out of the reader's buffer, so overlong lines are
// skipped instead of collected. Returns false once the source is exhausted.
fn read_row<R>(source: &mut R, board: &mut GameBoard, row: usize) -> io::Result<bool>
where
    R: BufRead,
{
    let mut col = 0;
    let mut read_any = false;

    loop {
        let available = match source.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        let (line, consumed, line_done) = match available.iter().position(|byte| *byte == b'\n') {
            Some(end) => (&available[..end], end + 1, true),
            None => (available, available.len(), false),
        };

        for byte in line.iter().take(board.cols() - col) {
            col += 1;
            if TileState::from_byte(*byte) == TileState::Alive {
                board.set_tile(Position { row, col }, TileState::Alive);
            }
        }

        source.consume(consumed);

        if line_done {
            return Ok(true);
        }
    }
}

pub fn load_world_file<P>(path: P, rows: usize, cols: usize) -> Result<GameBoard>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GameError::WorldFile {
        path: path.to_owned(),
        source,
    })?;

    load_world(BufReader::new(file), rows, cols)
}

pub fn parse_world(pattern: &str, rows: usize, cols: usize) -> Result<GameBoard> {
    load_world(pattern.as_bytes(), rows, cols)
}
