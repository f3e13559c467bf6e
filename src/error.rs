use thiserror::Error;

/// Rejected game configuration. Raised before any board exists.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Board of {rows}x{cols} cells is larger than the supported {max} cells")]
    BoardTooLarge { rows: usize, cols: usize, max: usize },
    #[error("Too many mines: {mines} requested for {capacity} cells, at least one cell must be safe")]
    TooManyMines { mines: usize, capacity: usize },
    #[error("Time limit must be at least one second")]
    ZeroTimeLimit,
    #[error("Mine at ({row}, {col}) is listed more than once")]
    DuplicateMine { row: usize, col: usize },
    #[error("Mine at ({row}, {col}) lies outside the board")]
    MineOutOfBounds { row: usize, col: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
