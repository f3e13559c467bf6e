use crate::action::Cursor;

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Row-major index of `(row, col)`, or `None` outside a `rows` x `cols` grid.
pub fn index_of((row, col): Cursor, rows: usize, cols: usize) -> Option<usize> {
    if rows <= row || cols <= col {
        None
    } else {
        Some(row * cols + col)
    }
}

pub fn position_of(index: usize, rows: usize, cols: usize) -> Option<Cursor> {
    if index >= rows * cols {
        None
    } else {
        Some((index / cols, index % cols))
    }
}

pub fn valid_neighbors(
    dirs: &[(i8, i8)],
    (row, col): Cursor,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = Cursor> {
    dirs.iter()
        .map(|(dr, dc)| (*dr as isize, *dc as isize))
        .filter_map(move |(dr, dc)| {
            Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
        })
        .filter(move |(r, c)| rows > *r && cols > *c)
}
