/// `(row, col)`, zero-based.
pub type Cursor = (usize, usize);

/// Inbound events a front-end feeds into a session, one at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Click on a cell; reveals or flags depending on the flag mode.
    CellAction(Cursor),
    ToggleFlagMode,
    /// One second elapsed.
    Tick,
}
