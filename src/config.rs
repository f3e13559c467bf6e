use crate::error::ConfigError;

/// Settings a session is created from. Defaults match a 10x10 board with 15 mines and 100 seconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
    /// Seconds on the countdown.
    pub time_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            mines: 15,
            time_limit: 100,
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, mines: usize, time_limit: u32) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            cols,
            mines,
            time_limit,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_layout(self.rows, self.cols, self.mines)?;
        if self.time_limit == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

/// Largest board a session accepts, in cells.
pub const MAX_CELLS: usize = 1 << 24;

/// Number of cells on a `rows` x `cols` board, refusing empty and oversized shapes.
pub fn cell_count(rows: usize, cols: usize) -> Result<usize, ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyBoard);
    }
    rows.checked_mul(cols)
        .filter(|&cells| cells <= MAX_CELLS)
        .ok_or(ConfigError::BoardTooLarge {
            rows,
            cols,
            max: MAX_CELLS,
        })
}

/// Board shape and mine count checks shared with the generator.
pub fn validate_layout(rows: usize, cols: usize, mines: usize) -> Result<(), ConfigError> {
    let capacity = cell_count(rows, cols)?;
    if mines >= capacity {
        return Err(ConfigError::TooManyMines { mines, capacity });
    }
    Ok(())
}
