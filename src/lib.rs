//! Timed minesweeper core: board generation, flood-fill reveal, flags and a countdown.
//!
//! A front-end drives a [`Minesweeper`] session with [`Action`]s and redraws from the returned
//! [`Diff`] and the session's queries.

pub mod action;
pub mod args;
pub mod board;
pub mod cell;
pub mod cell_content;
pub mod cell_state;
pub mod config;
pub mod diff;
pub mod error;
pub mod generator;
pub mod minesweeper;
pub mod util;
pub mod win_state;

pub use action::{Action, Cursor};
pub use board::Board;
pub use cell::{Cell, DisplayValue};
pub use cell_content::CellContent;
pub use cell_state::CellState;
pub use config::GameConfig;
pub use diff::{CellDiff, Diff};
pub use error::{ConfigError, GameError, Result};
pub use generator::{RandomSource, generate};
pub use minesweeper::Minesweeper;
pub use win_state::WinState;
