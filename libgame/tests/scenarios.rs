use std::{fs, io, path::PathBuf};

use libgame::{
    Game, GameError,
    board::{GameBoard, TileState},
    config::Config,
    driver::{self, Emitter},
    loader::{load_world_file, parse_world},
    pattern::render_pattern,
    pos::Position,
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

fn positions(cells: &[(usize, usize)]) -> Vec<Position> {
    cells.iter().copied().map(Position::from).collect()
}

/// Writes `contents` to a per-test file in the system temp dir.
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("libgame-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<(usize, String)>,
}

impl Emitter for Recorder {
    fn emit(&mut self, board: &GameBoard, generation: usize) -> io::Result<()> {
        self.frames.push((generation, render_pattern(board)));
        Ok(())
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let vertical = positions(&[(1, 2), (2, 2), (3, 2)]);
    let horizontal = positions(&[(2, 1), (2, 2), (2, 3)]);

    let mut board = GameBoard::new(3, 3);
    for pos in &vertical {
        board.set_tile(*pos, TileState::Alive);
    }

    let mut game = Game::new(board).unwrap();

    game.tick();
    assert_eq!(game.board().alive_positions().collect::<Vec<_>>(), horizontal);

    game.tick();
    assert_eq!(game.board().alive_positions().collect::<Vec<_>>(), vertical);
}

#[test]
fn glider_translates_diagonally() {
    let board = parse_world("-*---\n--*--\n***--\n-----\n-----\n", 5, 5).unwrap();
    let mut game = Game::new(board).unwrap();

    for _ in 0..4 {
        game.tick();
    }

    assert_eq!(
        render_pattern(game.board()),
        "-----\n--*--\n---*-\n-***-\n-----\n"
    );
}

#[test]
fn loaded_positions_round_trip() {
    let file = ScratchFile::new("round-trip.txt", "*   \n  * \n\n   *\n");
    let board = load_world_file(&file.0, 4, 4).unwrap();

    let expected = positions(&[(1, 1), (2, 3), (4, 4)]);
    for row in 0..=5 {
        for col in 0..=5 {
            let state = board.tile((row, col));
            if expected.contains(&Position::new(row, col)) {
                assert_eq!(state, TileState::Alive, "({row}, {col})");
            } else {
                assert_eq!(state, TileState::Dead, "({row}, {col})");
            }
        }
    }
}

#[test]
fn short_file_leaves_missing_rows_dead() {
    let file = ScratchFile::new("short.txt", "***\n");
    let board = load_world_file(&file.0, 5, 3).unwrap();

    assert_eq!(board.alive_positions().collect::<Vec<_>>(), positions(&[(1, 1), (1, 2), (1, 3)]));
}

#[test]
fn simulate_emits_generations_plus_one_frames() {
    let file = ScratchFile::new("simulate.txt", "-*-\n-*-\n-*-\n");
    let config = Config::new(3, 3, &file.0, 3).unwrap();

    let mut recorder = Recorder::default();
    let last = driver::simulate(&config, &mut recorder).unwrap();

    let vertical = "-*-\n-*-\n-*-\n";
    let horizontal = "---\n***\n---\n";
    assert_eq!(
        recorder.frames,
        vec![
            (0, vertical.to_owned()),
            (1, horizontal.to_owned()),
            (2, vertical.to_owned()),
            (3, horizontal.to_owned()),
        ]
    );
    assert_eq!(render_pattern(&last), horizontal);
}

#[test]
fn simulate_with_zero_generations_emits_once() {
    let file = ScratchFile::new("zero.txt", "**\n**\n");
    let config = Config::new(2, 2, &file.0, 0).unwrap();

    let mut recorder = Recorder::default();
    driver::simulate(&config, &mut recorder).unwrap();

    assert_eq!(recorder.frames, vec![(0, "**\n**\n".to_owned())]);
}

#[test]
fn simulate_fails_before_emitting_on_missing_file() {
    let config = Config {
        filename: PathBuf::from("no/such/world.txt"),
        ..Config::default()
    };

    let mut recorder = Recorder::default();
    let err = driver::simulate(&config, &mut recorder).unwrap_err();

    assert!(matches!(err, GameError::WorldFile { .. }));
    assert!(recorder.frames.is_empty());
}

#[test]
fn simulate_rejects_invalid_config_before_loading() {
    let config = Config {
        rows: 0,
        filename: PathBuf::from("no/such/world.txt"),
        ..Config::default()
    };

    let err = driver::simulate(&config, &mut Recorder::default()).unwrap_err();
    assert!(matches!(err, GameError::InvalidDimension { field: "rows", .. }));
}

proptest! {
    #[test]
    fn border_stays_dead(
        rows in 1..16_usize,
        cols in 1..16_usize,
        seed in any::<u64>(),
        generations in 0..12_usize,
    ) {
        let board = GameBoard::new_random(rows, cols, 0.4, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(board.border_is_dead());

        let mut game = Game::new(board).unwrap();
        for _ in 0..generations {
            game.tick();
            prop_assert!(game.board().border_is_dead());
        }
    }

    #[test]
    fn dead_world_stays_dead(rows in 1..16_usize, cols in 1..16_usize, generations in 0..12_usize) {
        let mut game = Game::new(GameBoard::new(rows, cols)).unwrap();
        for _ in 0..generations {
            game.tick();
        }

        prop_assert_eq!(game.board(), &GameBoard::new(rows, cols));
    }
}
