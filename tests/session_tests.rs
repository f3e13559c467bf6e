use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use timesweeper::{
    Action, Board, CellState, ConfigError, Cursor, DisplayValue, GameConfig, GameError,
    Minesweeper, RandomSource, WinState, generate,
};

/// Replays a fixed list of draws.
struct Scripted(VecDeque<usize>);

impl Scripted {
    fn new(draws: &[usize]) -> Self {
        Self(draws.iter().copied().collect())
    }
}

impl RandomSource for Scripted {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.pop_front().expect("script exhausted") % bound
    }
}

fn is_mine(board: &Board, pos: Cursor) -> bool {
    board.get(pos).unwrap().content.is_mine()
}

fn all_positions(rows: usize, cols: usize) -> impl Iterator<Item = Cursor> {
    (0..rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
}

#[test]
fn generated_boards_have_exact_counts() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = generate(12, 9, 20, &mut rng).unwrap();
        let mines = all_positions(12, 9).filter(|&p| is_mine(&board, p)).count();
        assert_eq!(mines, 20);

        for pos in all_positions(12, 9).filter(|&p| !is_mine(&board, p)) {
            let expected = board.neighbors(pos).filter(|&n| is_mine(&board, n)).count();
            let count = board.get(pos).unwrap().content.mine_count();
            assert!((0..=8).contains(&count));
            assert_eq!(count as usize, expected, "seed {seed} at {pos:?}");
        }
    }
}

#[test_log::test]
fn forced_corner_mine_cascades_to_victory() {
    let config = GameConfig::new(3, 3, 1, 30).unwrap();
    let mut game = Minesweeper::new(config, &mut Scripted::new(&[0, 0])).unwrap();
    assert_eq!(game.board().get((0, 0)).unwrap().content.mine_count(), -1);

    game.apply(Action::CellAction((2, 2))).unwrap();

    for pos in all_positions(3, 3).filter(|&p| p != (0, 0)) {
        assert_eq!(game.cell(pos).unwrap().0, CellState::Revealed, "{pos:?}");
    }
    assert_eq!(game.status(), WinState::Won);
    assert_eq!(game.cell((0, 0)).unwrap(), (CellState::Revealed, DisplayValue::Mine));
}

#[test]
fn single_safe_cell_wins_immediately() {
    let config = GameConfig::new(1, 1, 0, 5).unwrap();
    let mut game = Minesweeper::new(config, &mut Scripted::new(&[])).unwrap();
    let diff = game.apply(Action::CellAction((0, 0))).unwrap();
    assert_eq!(game.status(), WinState::Won);
    assert!(diff.ended());
    assert_eq!(game.cell((0, 0)).unwrap(), (CellState::Revealed, DisplayValue::Blank));
}

#[test]
fn flagged_cell_ignores_reveal() {
    let board = Board::with_mines(2, 2, &[(0, 0)]).unwrap();
    let mut game = Minesweeper::from_board(board, 10).unwrap();

    game.apply(Action::ToggleFlagMode).unwrap();
    game.apply(Action::CellAction((1, 1))).unwrap();
    game.apply(Action::ToggleFlagMode).unwrap();
    assert!(!game.flag_mode_active());

    let diff = game.apply(Action::CellAction((1, 1))).unwrap();
    assert!(diff.is_empty());
    assert_eq!(game.cell((1, 1)).unwrap(), (CellState::Flagged, DisplayValue::Flag));
    assert_eq!(game.status(), WinState::InProgress);
}

#[test]
fn revealing_a_mine_always_loses_by_mine() {
    for seed in 0..10 {
        let config = GameConfig::new(6, 6, 8, 50).unwrap();
        let mut game = Minesweeper::new(config, &mut StdRng::seed_from_u64(seed)).unwrap();
        let mine = all_positions(6, 6)
            .find(|&p| is_mine(game.board(), p))
            .unwrap();

        game.apply(Action::CellAction(mine)).unwrap();
        assert_eq!(game.status(), WinState::LostByMine);

        // every mine is now on display
        for pos in all_positions(6, 6).filter(|&p| is_mine(game.board(), p)) {
            assert_eq!(game.cell(pos).unwrap().1, DisplayValue::Mine);
        }
    }
}

#[test]
fn flood_fill_stays_inside_numbered_border() {
    for seed in 0..20 {
        let config = GameConfig::new(10, 10, 12, 100).unwrap();
        let mut game = Minesweeper::new(config, &mut StdRng::seed_from_u64(seed)).unwrap();
        let Some(zero) = all_positions(10, 10)
            .find(|&p| game.board().get(p).unwrap().content.mine_count() == 0)
        else {
            continue;
        };

        game.reveal_cell(zero).unwrap();
        if game.status() == WinState::Won {
            continue;
        }
        assert_eq!(game.status(), WinState::InProgress);

        let board = game.board();
        for pos in all_positions(10, 10) {
            let cell = board.get(pos).unwrap();
            if cell.state != CellState::Revealed {
                continue;
            }
            assert!(!cell.content.is_mine(), "seed {seed}: cascade hit a mine at {pos:?}");
            // a revealed zero means its whole neighbourhood was opened
            if cell.content.mine_count() == 0 {
                for n in board.neighbors(pos) {
                    assert_eq!(board.get(n).unwrap().state, CellState::Revealed);
                }
            }
        }
    }
}

#[test]
fn victory_needs_every_safe_cell() {
    let board = Board::with_mines(2, 3, &[(0, 0), (0, 2)]).unwrap();
    let mut game = Minesweeper::from_board(board, 10).unwrap();

    for pos in [(0, 1), (1, 0), (1, 1)] {
        game.reveal_cell(pos).unwrap();
        assert_eq!(game.status(), WinState::InProgress);
    }
    game.apply(Action::ToggleFlagMode).unwrap();
    game.apply(Action::CellAction((1, 2))).unwrap();
    assert_eq!(game.status(), WinState::InProgress);

    game.apply(Action::CellAction((1, 2))).unwrap();
    game.apply(Action::ToggleFlagMode).unwrap();
    game.apply(Action::CellAction((1, 2))).unwrap();
    assert_eq!(game.status(), WinState::Won);
}

#[test]
fn ticks_run_the_clock_down() {
    let config = GameConfig::new(4, 4, 3, 5).unwrap();
    let mut game = Minesweeper::new(config, &mut StdRng::seed_from_u64(1)).unwrap();
    for _ in 0..4 {
        game.apply(Action::Tick).unwrap();
    }
    assert_eq!(game.status(), WinState::InProgress);
    assert_eq!(game.remaining_seconds(), 1);

    game.apply(Action::Tick).unwrap();
    assert_eq!(game.status(), WinState::LostByTimeout);
}

#[test]
fn ticks_after_the_end_change_nothing() {
    let board = Board::with_mines(2, 2, &[(1, 0)]).unwrap();
    let mut game = Minesweeper::from_board(board, 8).unwrap();
    game.reveal_cell((1, 0)).unwrap();
    assert_eq!(game.status(), WinState::LostByMine);

    let board_before = game.board().clone();
    let seconds = game.remaining_seconds();
    for _ in 0..20 {
        assert!(game.apply(Action::Tick).unwrap().is_empty());
    }
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.remaining_seconds(), seconds);
    assert_eq!(game.status(), WinState::LostByMine);
}

#[test]
fn restart_builds_a_fresh_session() {
    let config = GameConfig::new(5, 5, 4, 20).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let mut game = Minesweeper::new(config, &mut rng).unwrap();
    game.apply(Action::Tick).unwrap();
    game.apply(Action::ToggleFlagMode).unwrap();

    let fresh = game.restart(&mut rng).unwrap();
    assert_eq!(fresh.config(), config);
    assert_eq!(fresh.remaining_seconds(), 20);
    assert!(!fresh.flag_mode_active());
    assert_eq!(fresh.status(), WinState::InProgress);
    assert_eq!(fresh.board().mine_total(), 4);
}

#[test]
fn bad_configuration_is_refused() {
    let mut rng = StdRng::seed_from_u64(0);
    let config = GameConfig {
        rows: 3,
        cols: 3,
        mines: 9,
        time_limit: 10,
    };
    assert_eq!(
        Minesweeper::new(config, &mut rng).unwrap_err(),
        GameError::Config(ConfigError::TooManyMines { mines: 9, capacity: 9 })
    );
}

#[test]
fn out_of_bounds_requests_are_errors() {
    let board = Board::with_mines(3, 4, &[(0, 0)]).unwrap();
    let mut game = Minesweeper::from_board(board, 10).unwrap();
    assert_eq!(
        game.apply(Action::CellAction((3, 0))),
        Err(GameError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 4 })
    );
    assert_eq!(game.status(), WinState::InProgress);
}
