use crate::cell_content::CellContent;
use crate::cell_content::CellContent::*;
use crate::cell_state::CellState;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// What a collaborator should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DisplayValue {
    /// Still covered.
    Hidden,
    /// Revealed, no neighbouring mines.
    Blank,
    Number(u8),
    Mine,
    Flag,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    pub content: CellContent,
}

impl Cell {
    pub fn display_value(&self) -> DisplayValue {
        match (self.state, self.content) {
            (CellState::Hidden, _) => DisplayValue::Hidden,
            (CellState::Flagged, _) => DisplayValue::Flag,
            (CellState::Revealed, Mine) => DisplayValue::Mine,
            (CellState::Revealed, Empty(0)) => DisplayValue::Blank,
            (CellState::Revealed, Empty(n)) => DisplayValue::Number(n),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match self.display_value() {
            DisplayValue::Hidden => '#',
            DisplayValue::Flag => '!',
            DisplayValue::Mine => '*',
            DisplayValue::Blank => '.',
            DisplayValue::Number(n) => std::char::from_digit(n as u32, 10).unwrap_or('?'),
        };

        f.write_char(c)
    }
}
