use super::{
    board::{GameBoard, TileState},
    pos::Position,
};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Computes the next state of the live cell at `pos` under B3/S23, reading only `snapshot`.
///
/// `pos` must lie in the live region, so every neighbour is either a live cell or border.
pub fn next_state(snapshot: &GameBoard, pos: Position) -> TileState {
    debug_assert!(
        snapshot.is_live(pos),
        "Rule evaluated on border cell {pos:?}"
    );

    let alive_neighbor_count = alive_neighbor_count(snapshot, pos);

    match (snapshot.tile(pos), alive_neighbor_count) {
        (TileState::Alive, 2 | 3) => TileState::Alive,
        (TileState::Dead, 3) => TileState::Alive,
        _ => TileState::Dead,
    }
}

/// Number of alive cells among the eight cells surrounding `pos`.
pub fn alive_neighbor_count(board: &GameBoard, pos: Position) -> usize {
    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .map(|[row_offset, col_offset]| Position {
            row: pos.row.wrapping_add_signed(*row_offset),
            col: pos.col.wrapping_add_signed(*col_offset),
        })
        .filter(|neighbor| board.tile(*neighbor) == TileState::Alive)
        .count()
}
