#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}
