use crate::config::GameConfig;
use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Timed command line minesweeper
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct MinesweeperArgs {
    /// rows
    #[arg(short, long, default_value_t = 10)]
    pub rows: usize,
    /// columns
    #[arg(short, long, default_value_t = 10)]
    pub cols: usize,
    /// amount of mines
    #[arg(short, long, default_value_t = 15)]
    pub mines: usize,
    /// seconds before the game is lost
    #[arg(short, long, default_value_t = 100)]
    pub time_limit: u32,
    /// seed for a reproducible board
    #[arg(long)]
    pub seed: Option<u64>,
    /// write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl MinesweeperArgs {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.rows, self.cols, self.mines, self.time_limit)
    }
}
