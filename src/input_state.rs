use std::time::Instant;
use timesweeper::{Action, Cursor};

#[derive(Debug)]
pub struct InputState {
    pub cursor: Cursor,
    pub action: Option<Action>,
    /// When the last countdown tick was delivered.
    pub last_tick: Instant,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            cursor: (0, 0),
            action: None,
            last_tick: Instant::now(),
        }
    }
}
