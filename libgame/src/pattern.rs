use std::io::{self, Write};

use super::board::{GameBoard, TileState};

/// Writes the live region of `board`, one line per row, with `dead_char` for dead cells.
///
/// The output loads back into an identical board as long as `dead_char` isn't `*`.
pub fn write_pattern<W>(board: &GameBoard, out: &mut W, dead_char: char) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let mut line = String::with_capacity(board.cols() + 1);

    for row in 1..=board.rows() {
        line.clear();
        line.extend((1..=board.cols()).map(|col| match board.tile((row, col)) {
            TileState::Dead => dead_char,
            alive => alive.as_char(),
        }));
        line.push('\n');

        out.write_all(line.as_bytes())?;
    }

    Ok(())
}

pub fn render_pattern(board: &GameBoard) -> String {
    let mut out = Vec::with_capacity(board.rows() * (board.cols() + 1));
    write_pattern(board, &mut out, TileState::DEAD_CHAR).expect("writing into a Vec can't fail");
    String::from_utf8_lossy(&out).into_owned()
}
