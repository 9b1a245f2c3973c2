//! Piece ownership of points and zones.
//!
//! A point that lies on a piece breakpoint along either axis is touched by
//! more than one piece. The crate's `ColorAssigner` decides which pieces
//! those are from the current piece `c` and which breakpoints the point
//! lands on: `c - 1` is the piece to the left, `c - pieces_x` the piece below, and
//! `c - pieces_x - 1` the diagonal one.

use meshpart_core::PieceId;
use meshpart_layout::AxisStep;
use smallvec::{smallvec, SmallVec};

/// Ordered owner list of a shared point.
///
/// Quad and hex points have at most four owners and fit inline. The pie
/// apex lists every piece of the first piece row and spills to the heap
/// once that row is wider than four.
pub type OwnerList = SmallVec<[PieceId; 4]>;

/// Ownership tag stored per point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointColor {
    /// Owned by exactly one piece.
    Owned(PieceId),
    /// Owned by several pieces; the owner list is kept alongside the mesh.
    Shared,
}

impl PointColor {
    /// The single owner, or `None` for a shared point.
    pub fn owner(self) -> Option<PieceId> {
        match self {
            Self::Owned(id) => Some(id),
            Self::Shared => None,
        }
    }

    /// Whether the point is shared.
    pub fn is_shared(self) -> bool {
        matches!(self, Self::Shared)
    }
}

/// Ownership decided for one generated point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Ownership {
    /// A single owning piece.
    Single(PieceId),
    /// Several owning pieces, in ascending order.
    Shared(OwnerList),
}

/// Assigns owners to points and zones for a piece grid `pieces_x` wide.
///
/// Steps must come from an [`AxisCursor`](meshpart_layout::AxisCursor) over
/// the same partition: a step on a boundary always has `piece >= 1`, so the
/// left and lower neighbours exist.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ColorAssigner {
    pieces_x: u32,
}

impl ColorAssigner {
    /// Assigner for a piece grid with `pieces_x` columns.
    pub(crate) fn new(pieces_x: u32) -> Self {
        Self { pieces_x }
    }

    /// Piece owning the cell at the given cursor positions.
    pub(crate) fn piece(&self, x: AxisStep, y: AxisStep) -> PieceId {
        PieceId::from_grid(x.piece, y.piece, self.pieces_x)
    }

    /// Ownership of a grid point in the rectangular and pie meshes.
    ///
    /// A point on both breakpoints is shared by up to four pieces:
    /// diagonal, below, left, own.
    pub(crate) fn quad_point(&self, x: AxisStep, y: AxisStep) -> Ownership {
        let c = self.piece(x, y).0;
        if !x.on_boundary && !y.on_boundary {
            return Ownership::Single(PieceId(c));
        }
        let mut owners = OwnerList::new();
        if x.on_boundary && y.on_boundary {
            owners.push(PieceId(c - self.pieces_x - 1));
        }
        if y.on_boundary {
            owners.push(PieceId(c - self.pieces_x));
        }
        if x.on_boundary {
            owners.push(PieceId(c - 1));
        }
        owners.push(PieceId(c));
        Ownership::Shared(owners)
    }

    /// Ownership of a collapsed point on the outer rows or columns of the
    /// hexagonal mesh.
    ///
    /// Unlike [`quad_point`](Self::quad_point) the diagonal piece is never
    /// included.
    pub(crate) fn hex_edge_point(&self, x: AxisStep, y: AxisStep) -> Ownership {
        let c = self.piece(x, y).0;
        if !x.on_boundary && !y.on_boundary {
            return Ownership::Single(PieceId(c));
        }
        let mut owners = OwnerList::new();
        if y.on_boundary {
            owners.push(PieceId(c - self.pieces_x));
        }
        if x.on_boundary {
            owners.push(PieceId(c - 1));
        }
        owners.push(PieceId(c));
        Ownership::Shared(owners)
    }

    /// Ownership of the two points an interior hex node is split into.
    ///
    /// On a breakpoint corner the first point (up-left) is shared with the
    /// left neighbour and the second (down-right) with the one below; both
    /// also include the diagonal piece.
    pub(crate) fn hex_point_pair(&self, x: AxisStep, y: AxisStep) -> (Ownership, Ownership) {
        let c = self.piece(x, y).0;
        let px = self.pieces_x;
        match (x.on_boundary, y.on_boundary) {
            (false, false) => (
                Ownership::Single(PieceId(c)),
                Ownership::Single(PieceId(c)),
            ),
            (true, true) => (
                Ownership::Shared(smallvec![
                    PieceId(c - px - 1),
                    PieceId(c - 1),
                    PieceId(c)
                ]),
                Ownership::Shared(smallvec![
                    PieceId(c - px - 1),
                    PieceId(c - px),
                    PieceId(c)
                ]),
            ),
            (false, true) => {
                let owners: OwnerList = smallvec![PieceId(c - px), PieceId(c)];
                (Ownership::Shared(owners.clone()), Ownership::Shared(owners))
            }
            (true, false) => {
                let owners: OwnerList = smallvec![PieceId(c - 1), PieceId(c)];
                (Ownership::Shared(owners.clone()), Ownership::Shared(owners))
            }
        }
    }

    /// Ownership of the pie apex, which every piece of the first piece row
    /// touches.
    pub(crate) fn apex(&self) -> Ownership {
        if self.pieces_x == 1 {
            Ownership::Single(PieceId(0))
        } else {
            Ownership::Shared((0..self.pieces_x).map(PieceId).collect())
        }
    }
}
