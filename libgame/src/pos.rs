/// A cell coordinate in border-inclusive board space.
///
/// Row and column `0` (and `rows + 1` / `cols + 1`) address the dead border,
/// the live region is `1..=rows` by `1..=cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_keep_row_then_col() {
        let pos = Position::from([2, 5]);
        assert_eq!(pos, Position { row: 2, col: 5 });
        assert_eq!(Position::from((2, 5)), pos);
        assert_eq!(<[usize; 2]>::from(pos), [2, 5]);
    }
}
