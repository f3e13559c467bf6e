use crate::action::Action::*;
use crate::action::{Action, Cursor};
use crate::board::Board;
use crate::cell::DisplayValue;
use crate::cell_content::CellContent::*;
use crate::cell_state::CellState;
use crate::cell_state::CellState::{Flagged, Hidden, Revealed};
use crate::config::GameConfig;
use crate::diff::{CellDiff, Diff};
use crate::error::{ConfigError, Result};
use crate::generator::{RandomSource, generate};
use crate::win_state::WinState;
use crate::win_state::WinState::{InProgress, LostByMine, LostByTimeout, Won};
use std::collections::VecDeque;
use std::fmt;
use std::fmt::{Display, Formatter};

/// One game: a board, the countdown and the flag mode.
///
/// Once the status leaves [`WinState::InProgress`] every mutating call is a no-op, except
/// [`Minesweeper::toggle_flag_mode`] which only flips the mode. A new game is a new session, see
/// [`Minesweeper::restart`].
#[derive(Debug, Clone)]
pub struct Minesweeper {
    config: GameConfig,
    board: Board,
    win_state: WinState,
    remaining_seconds: u32,
    flag_mode: bool,
    flagged_cells: usize,
    hidden_safe_cells: usize,
    // reused between reveals so the queue is only allocated once
    point_queue: VecDeque<Cursor>,
}

impl Minesweeper {
    /// Validates `config` and generates a fresh random board for it.
    pub fn new<R: RandomSource + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let board = generate(config.rows, config.cols, config.mines, rng)?;
        Self::from_board(board, config.time_limit)
    }

    /// Starts a session on a prepared board.
    pub fn from_board(board: Board, time_limit: u32) -> Result<Self> {
        if time_limit == 0 {
            return Err(ConfigError::ZeroTimeLimit.into());
        }
        let config = GameConfig {
            rows: board.rows(),
            cols: board.cols(),
            mines: board.mine_total(),
            time_limit,
        };
        log::info!(
            "new game: {}x{} board, {} mines, {}s",
            config.rows,
            config.cols,
            config.mines,
            config.time_limit
        );

        Ok(Self {
            hidden_safe_cells: board.len() - board.mine_total(),
            config,
            board,
            win_state: InProgress,
            remaining_seconds: time_limit,
            flag_mode: false,
            flagged_cells: 0,
            point_queue: VecDeque::new(),
        })
    }

    /// A brand-new session with the same settings and a newly generated board.
    pub fn restart<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Self> {
        Self::new(self.config, rng)
    }

    pub fn apply(&mut self, action: Action) -> Result<Diff> {
        match action {
            CellAction(cursor) => self.handle_cell_action(cursor),
            ToggleFlagMode => Ok(self.toggle_flag_mode()),
            Tick => Ok(self.tick()),
        }
    }

    pub fn toggle_flag_mode(&mut self) -> Diff {
        self.flag_mode = !self.flag_mode;
        Diff::new(self.win_state)
    }

    /// A click on `cursor`: flags in flag mode, reveals otherwise.
    pub fn handle_cell_action(&mut self, cursor: Cursor) -> Result<Diff> {
        let index = self.checked_index(cursor)?;
        if self.win_state.is_terminal() {
            return Ok(Diff::new(self.win_state));
        }

        if self.flag_mode {
            let mut diff = Diff::new(self.win_state);
            let state = self.board.cells()[index].state;
            match state {
                Hidden => self.set_state(index, Flagged, &mut diff),
                Flagged => self.set_state(index, Hidden, &mut diff),
                Revealed => {}
            }
            Ok(diff)
        } else {
            self.reveal_cell(cursor)
        }
    }

    /// Reveals `cursor`, cascading through empty cells, regardless of the flag mode.
    ///
    /// A flagged or already revealed target is left alone, so calling this on a flagged mine does
    /// not lose the game. Front-ends normally go through [`Minesweeper::handle_cell_action`].
    pub fn reveal_cell(&mut self, cursor: Cursor) -> Result<Diff> {
        let index = self.checked_index(cursor)?;
        let mut diff = Diff::new(self.win_state);
        if self.win_state.is_terminal() {
            return Ok(diff);
        }

        let cell = self.board.cells()[index];
        if let Flagged | Revealed = cell.state {
            return Ok(diff);
        }

        if let Mine = cell.content {
            self.set_state(index, Revealed, &mut diff);
            log::info!("mine hit at {cursor:?}");
            self.end(LostByMine, &mut diff);
            return Ok(diff);
        }

        self.uncover(cursor, &mut diff);

        if self.hidden_safe_cells == 0 {
            self.end(Won, &mut diff);
        }
        Ok(diff)
    }

    /// One second of the countdown.
    pub fn tick(&mut self) -> Diff {
        let mut diff = Diff::new(self.win_state);
        if self.win_state.is_terminal() {
            return diff;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.end(LostByTimeout, &mut diff);
        }
        diff
    }

    /// Breadth-first reveal from `start`. Zero cells expand to all neighbours, numbered cells stop
    /// the cascade. Already revealed cells are skipped when dequeued.
    fn uncover(&mut self, start: Cursor, diff: &mut Diff) {
        self.point_queue.clear();
        self.point_queue.push_back(start);

        while let Some(cursor) = self.point_queue.pop_front() {
            let Some(index) = self.board.index_of(cursor) else {
                continue;
            };
            let cell = self.board.cells()[index];
            if let Revealed = cell.state {
                continue;
            }
            self.set_state(index, Revealed, diff);

            if let Empty(0) = cell.content {
                self.point_queue.extend(self.board.neighbors(cursor));
            }
        }
    }

    fn end(&mut self, status: WinState, diff: &mut Diff) {
        self.win_state = status;
        diff.status_after = status;
        log::info!(
            "game over: {status:?} with {}s left, {} flags placed",
            self.remaining_seconds,
            self.flagged_cells
        );
        self.finalize_board(diff);
    }

    /// Exposes every mine that is not flagged, so the whole layout can be drawn at once.
    fn finalize_board(&mut self, diff: &mut Diff) {
        for index in 0..self.board.len() {
            let cell = self.board.cells()[index];
            if let (Mine, Hidden) = (cell.content, cell.state) {
                self.set_state(index, Revealed, diff);
            }
        }
    }

    fn set_state(&mut self, index: usize, state: CellState, diff: &mut Diff) {
        let cell = &mut self.board.cells_mut()[index];
        let before = *cell;
        if before.state == state {
            return;
        }
        cell.state = state;
        let after = *cell;

        match (before.state, state) {
            (Flagged, _) => self.flagged_cells -= 1,
            (_, Flagged) => self.flagged_cells += 1,
            _ => {}
        }
        if let (Empty(_), Revealed) = (before.content, state) {
            self.hidden_safe_cells -= 1;
        }

        diff.cells.push(CellDiff {
            index,
            before,
            after,
        });
    }

    fn checked_index(&self, cursor: Cursor) -> Result<usize> {
        self.board.checked_index(cursor).inspect_err(|e| {
            log::warn!("rejected request: {e}");
        })
    }
}

impl Minesweeper {
    pub fn status(&self) -> WinState {
        self.win_state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn flag_mode_active(&self) -> bool {
        self.flag_mode
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State and drawable value of one cell.
    pub fn cell(&self, cursor: Cursor) -> Result<(CellState, DisplayValue)> {
        let index = self.board.checked_index(cursor)?;
        let cell = &self.board.cells()[index];
        Ok((cell.state, cell.display_value()))
    }

    pub fn flags_placed(&self) -> usize {
        self.flagged_cells
    }

    /// Mine total minus flags placed. Negative when the player over-flags.
    pub fn mines_remaining(&self) -> isize {
        self.config.mines as isize - self.flagged_cells as isize
    }

    /// Safe cells still waiting to be revealed.
    pub fn hidden_safe_cells(&self) -> usize {
        self.hidden_safe_cells
    }
}

impl Display for Minesweeper {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
