#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    /// Number of mines among the eight neighbours.
    Empty(u8),
    Mine,
}

impl CellContent {
    /// Integer encoding used by collaborators: `-1` for a mine, otherwise the neighbour count.
    pub fn mine_count(self) -> i8 {
        match self {
            Self::Empty(n) => n as i8,
            Self::Mine => -1,
        }
    }

    pub fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty(0)
    }
}
