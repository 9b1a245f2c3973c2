//! Per-axis piece boundaries and the cursor that walks them.

/// One breakpoint on an axis of the zone grid.
///
/// Ordered `Before < At(_) < Beyond`, with `At` ordered by index, so an
/// [`AxisBounds`] sequence is non-decreasing end to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Open lower end: precedes every index.
    Before,
    /// Ownership changes at this grid index.
    At(u32),
    /// Open upper end: no index ever reaches it.
    Beyond,
}

impl Breakpoint {
    /// Whether a walk that has arrived at `index` has passed this breakpoint.
    pub fn is_reached_by(self, index: u32) -> bool {
        match self {
            Self::Before => true,
            Self::At(b) => index >= b,
            Self::Beyond => false,
        }
    }

    /// Whether `index` lies exactly on this breakpoint.
    pub fn lands_on(self, index: u32) -> bool {
        matches!(self, Self::At(b) if b == index)
    }
}

/// Breakpoints along one axis for `k` pieces over `m` zones.
///
/// Holds `k + 1` entries: [`Breakpoint::Before`], then `At(i * m / k)` for
/// `i = 1..k` (integer division), then [`Breakpoint::Beyond`]. Piece `p` owns
/// indices from breakpoint `p` up to, but excluding, breakpoint `p + 1`.
///
/// # Examples
///
/// ```
/// use meshpart_layout::{AxisBounds, Breakpoint};
///
/// let bounds = AxisBounds::new(3, 10);
/// assert_eq!(
///     bounds.breakpoints(),
///     &[Breakpoint::Before, Breakpoint::At(3), Breakpoint::At(6), Breakpoint::Beyond]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisBounds {
    breaks: Vec<Breakpoint>,
}

impl AxisBounds {
    /// Compute the breakpoints for `pieces` pieces over `zones` zones.
    ///
    /// # Panics
    ///
    /// Panics if `pieces` is 0. [`plan_layout`](crate::plan_layout) never
    /// produces an empty axis.
    pub fn new(pieces: u32, zones: u32) -> Self {
        assert!(pieces >= 1, "an axis needs at least one piece");
        let k = pieces as u64;
        let m = zones as u64;
        let mut breaks = Vec::with_capacity(pieces as usize + 1);
        breaks.push(Breakpoint::Before);
        for i in 1..k {
            breaks.push(Breakpoint::At((i * m / k) as u32));
        }
        breaks.push(Breakpoint::Beyond);
        Self { breaks }
    }

    /// Number of breakpoints (`pieces + 1`).
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// Always returns `false`: there are at least the two open ends.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of pieces along this axis.
    pub fn pieces(&self) -> u32 {
        (self.breaks.len() - 1) as u32
    }

    /// All breakpoints, open ends included.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breaks
    }

    /// Lower breakpoint of piece `piece`.
    pub fn lower(&self, piece: u32) -> Breakpoint {
        self.breaks[piece as usize]
    }

    /// Upper breakpoint of piece `piece`.
    pub fn upper(&self, piece: u32) -> Breakpoint {
        self.breaks[piece as usize + 1]
    }

    /// A cursor positioned on the first piece.
    pub fn cursor(&self) -> AxisCursor<'_> {
        AxisCursor {
            bounds: self,
            piece: 0,
        }
    }
}

/// Where a visited index sits relative to the piece boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisStep {
    /// Piece column (or row) the index belongs to.
    pub piece: u32,
    /// The index lies on that piece's lower breakpoint, so it is shared
    /// with the previous piece along this axis.
    pub on_boundary: bool,
}

/// Walks one axis in increasing index order, tracking the current piece.
///
/// The cursor advances at most one piece per visited index. Indices must be
/// visited in non-decreasing order, one [`step`](Self::step) each.
#[derive(Clone, Debug)]
pub struct AxisCursor<'a> {
    bounds: &'a AxisBounds,
    piece: usize,
}

impl AxisCursor<'_> {
    /// Visit `index`, moving to the next piece if its breakpoint is reached.
    pub fn step(&mut self, index: u32) -> AxisStep {
        // The last entry is `Beyond`, so `piece + 1` stays in range.
        if self.bounds.breaks[self.piece + 1].is_reached_by(index) {
            self.piece += 1;
        }
        AxisStep {
            piece: self.piece as u32,
            on_boundary: self.bounds.breaks[self.piece].lands_on(index),
        }
    }

    /// Current piece without visiting a new index.
    pub fn piece(&self) -> u32 {
        self.piece as u32
    }
}
