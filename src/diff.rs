use crate::cell::Cell;
use crate::win_state::WinState;

/// Outcome of one inbound event: every cell that changed plus the status before and after.
///
/// Scalars such as the remaining time or the flag mode are not tracked here; read them from the
/// session after each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    pub status_before: WinState,
    pub status_after: WinState,
    pub cells: Vec<CellDiff>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellDiff {
    pub index: usize,
    pub before: Cell,
    pub after: Cell,
}

impl Diff {
    pub fn new(status: WinState) -> Self {
        Self {
            status_before: status,
            status_after: status,
            cells: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.status_before == self.status_after
    }

    /// True iff this event moved the game into a terminal state.
    pub fn ended(&self) -> bool {
        !self.status_before.is_terminal() && self.status_after.is_terminal()
    }
}
