use crate::board::Board;
use crate::config::validate_layout;
use crate::error::Result;
use rand::Rng;

/// Source of uniform random indices. Any [`rand::Rng`] qualifies; tests plug in scripted sources.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` is never zero.
    fn pick(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Places `mine_total` mines uniformly at random by rejection sampling.
///
/// Draws a row and a column, and retries when the cell already holds a mine. Neighbour counts are
/// bumped as each mine lands, so the board is complete when the loop ends.
pub fn generate<R: RandomSource + ?Sized>(
    rows: usize,
    cols: usize,
    mine_total: usize,
    rng: &mut R,
) -> Result<Board> {
    validate_layout(rows, cols, mine_total)?;

    let mut board = Board::empty(rows, cols)?;
    let mut draws = 0usize;
    while board.mine_total() < mine_total {
        let cursor = (rng.pick(rows), rng.pick(cols));
        draws += 1;
        board.place_mine(cursor);
    }

    log::debug!(
        "generated {rows}x{cols} board with {mine_total} mines in {draws} draws"
    );
    Ok(board)
}
