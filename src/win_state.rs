#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WinState {
    #[default]
    InProgress,
    Won,
    LostByMine,
    LostByTimeout,
}

impl WinState {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn is_lost(self) -> bool {
        matches!(self, Self::LostByMine | Self::LostByTimeout)
    }
}
