//! Row-major walk over a grid with piece cursors on both axes.

use meshpart_layout::{AxisStep, Partition};

/// Visit `(i, j)` for `j in 0..rows`, `i in 0..cols`, row-major, together
/// with each index's position relative to the piece breakpoints.
///
/// Pass `nx + 1, ny + 1` to walk grid points and `nx, ny` to walk zones.
/// The column cursor restarts on every row.
pub(crate) fn walk(
    partition: &Partition,
    cols: u32,
    rows: u32,
    mut visit: impl FnMut(u32, u32, AxisStep, AxisStep),
) {
    let mut row_cursor = partition.bounds_y.cursor();
    for j in 0..rows {
        let y = row_cursor.step(j);
        let mut col_cursor = partition.bounds_x.cursor();
        for i in 0..cols {
            let x = col_cursor.step(i);
            visit(i, j, x, y);
        }
    }
}
