//! Piece-grid planning: factor the piece count into near-square pieces.

use meshpart_core::ConfigError;
use tracing::debug;

/// Slack applied before rounding the ideal column count, so that an exact
/// square root computed as `2.9999999999999996` still floors to 3.
const ROUNDING_SLACK: f64 = 1.0e-12;

/// Shape of the piece grid: `pieces_x` columns by `pieces_y` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceLayout {
    /// Piece-grid columns.
    pub pieces_x: u32,
    /// Piece-grid rows.
    pub pieces_y: u32,
}

impl PieceLayout {
    /// Total number of pieces.
    pub fn piece_count(&self) -> u32 {
        self.pieces_x * self.pieces_y
    }

    /// Longest edge, in zones, of a piece when a `zones_x * zones_y` grid is
    /// split with this layout.
    pub fn longest_edge(&self, zones_x: u32, zones_y: u32) -> f64 {
        longest_edge(
            zones_x as f64,
            zones_y as f64,
            self.pieces_x,
            self.piece_count(),
        )
    }
}

/// `max(nx / cols, ny / rows)` for a split into `cols` columns of `pieces`.
fn longest_edge(nx: f64, ny: f64, cols: u32, pieces: u32) -> f64 {
    (nx / cols as f64).max(ny / (pieces / cols) as f64)
}

/// Factor `pieces` into a grid whose pieces are as close to square as the
/// divisors of `pieces` allow.
///
/// Square pieces would need `nx / pcx == ny / pcy` with `pcx * pcy == pieces`,
/// i.e. `pcx = sqrt(pieces * nx / ny)`. The planner works with the shorter
/// zone axis first, rounds that ideal down and up to the nearest divisors of
/// `pieces`, and keeps whichever gives the shorter longest edge. On an exact
/// tie the rounded-down candidate wins.
///
/// # Errors
///
/// [`ConfigError::NoPieces`] for zero pieces and [`ConfigError::EmptyGrid`]
/// for a zero zone dimension.
///
/// # Examples
///
/// ```
/// use meshpart_layout::plan_layout;
///
/// let layout = plan_layout(6, 30, 20).unwrap();
/// assert_eq!((layout.pieces_x, layout.pieces_y), (3, 2));
/// assert_eq!(layout.piece_count(), 6);
/// ```
pub fn plan_layout(pieces: u32, zones_x: u32, zones_y: u32) -> Result<PieceLayout, ConfigError> {
    if pieces == 0 {
        return Err(ConfigError::NoPieces);
    }
    if zones_x == 0 || zones_y == 0 {
        return Err(ConfigError::EmptyGrid);
    }

    let mut nx = zones_x as f64;
    let mut ny = zones_y as f64;
    let swapped = nx > ny;
    if swapped {
        std::mem::swap(&mut nx, &mut ny);
    }

    let ideal = (pieces as f64 * nx / ny).sqrt();

    // Largest divisor not above the ideal; 1 always divides.
    let mut below = ((ideal + ROUNDING_SLACK).floor() as u32).max(1);
    while pieces % below != 0 {
        below -= 1;
    }
    // Smallest divisor not below the ideal; `pieces` always divides.
    let mut above = ((ideal - ROUNDING_SLACK).ceil() as u32).max(1);
    while pieces % above != 0 {
        above += 1;
    }

    let long_below = longest_edge(nx, ny, below, pieces);
    let long_above = longest_edge(nx, ny, above, pieces);
    let cols = if long_below <= long_above { below } else { above };

    let mut layout = PieceLayout {
        pieces_x: cols,
        pieces_y: pieces / cols,
    };
    if swapped {
        std::mem::swap(&mut layout.pieces_x, &mut layout.pieces_y);
    }

    debug!(
        "Piece layout for {} pieces on {}x{} zones: {}x{} (candidates {} / {}, longest edge {:.3})",
        pieces,
        zones_x,
        zones_y,
        layout.pieces_x,
        layout.pieces_y,
        below,
        above,
        long_below.min(long_above)
    );

    Ok(layout)
}
