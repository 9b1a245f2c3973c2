//! The generated mesh and its read-only accessors.

use crate::ownership::{OwnerList, PointColor};
use indexmap::IndexMap;
use meshpart_core::PieceId;
use meshpart_layout::{Partition, PieceLayout};

/// A generated, partitioned mesh.
///
/// Points are stored as parallel coordinate and color sequences. Zone
/// adjacency is run-length: zone `z` references
/// `zone_point_list()[zone_start()[z]..][..zone_size()[z]]`. Shared points
/// have their owner lists in an insertion-ordered map keyed by point index,
/// so iterating it visits shared points in increasing index order.
///
/// Immutable once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub(crate) partition: Partition,
    pub(crate) point_x: Vec<f64>,
    pub(crate) point_y: Vec<f64>,
    pub(crate) point_colors: Vec<PointColor>,
    pub(crate) shared: IndexMap<usize, OwnerList>,
    pub(crate) zone_start: Vec<usize>,
    pub(crate) zone_size: Vec<usize>,
    pub(crate) zone_points: Vec<usize>,
    pub(crate) zone_colors: Vec<PieceId>,
}

impl Mesh {
    /// The partition the mesh was generated with.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Shape of the piece grid.
    pub fn layout(&self) -> PieceLayout {
        self.partition.layout
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.point_x.len()
    }

    /// Number of zones.
    pub fn zone_count(&self) -> usize {
        self.zone_start.len()
    }

    // ── Points ──────────────────────────────────────────────────

    /// x coordinates, indexed by point.
    pub fn point_x(&self) -> &[f64] {
        &self.point_x
    }

    /// y coordinates, indexed by point.
    pub fn point_y(&self) -> &[f64] {
        &self.point_y
    }

    /// Coordinates of point `p`.
    pub fn point(&self, p: usize) -> (f64, f64) {
        (self.point_x[p], self.point_y[p])
    }

    /// Ownership tags, indexed by point.
    pub fn point_colors(&self) -> &[PointColor] {
        &self.point_colors
    }

    /// Ownership tag of point `p`.
    pub fn point_color(&self, p: usize) -> PointColor {
        self.point_colors[p]
    }

    /// Owner list of point `p` if it is shared.
    pub fn shared_owners(&self, p: usize) -> Option<&[PieceId]> {
        self.shared.get(&p).map(|owners| owners.as_slice())
    }

    /// Every shared point with its owners, in increasing point order.
    pub fn shared_points(&self) -> impl Iterator<Item = (usize, &[PieceId])> + '_ {
        self.shared.iter().map(|(&p, owners)| (p, owners.as_slice()))
    }

    /// Number of shared points.
    pub fn shared_count(&self) -> usize {
        self.shared.len()
    }

    /// All pieces owning point `p`: the single owner, or the shared list.
    pub fn point_owners(&self, p: usize) -> &[PieceId] {
        match &self.point_colors[p] {
            PointColor::Owned(id) => std::slice::from_ref(id),
            PointColor::Shared => self.shared_owners(p).unwrap_or(&[]),
        }
    }

    // ── Zones ───────────────────────────────────────────────────

    /// Offset of each zone's first point in [`zone_point_list`](Self::zone_point_list).
    pub fn zone_start(&self) -> &[usize] {
        &self.zone_start
    }

    /// Number of points of each zone.
    pub fn zone_size(&self) -> &[usize] {
        &self.zone_size
    }

    /// Flat point-index list of all zones.
    pub fn zone_point_list(&self) -> &[usize] {
        &self.zone_points
    }

    /// Point indices of zone `z`, in winding order.
    pub fn zone_points(&self, z: usize) -> &[usize] {
        let start = self.zone_start[z];
        &self.zone_points[start..start + self.zone_size[z]]
    }

    /// Owning pieces, indexed by zone.
    pub fn zone_colors(&self) -> &[PieceId] {
        &self.zone_colors
    }

    /// Owning piece of zone `z`.
    pub fn zone_color(&self, z: usize) -> PieceId {
        self.zone_colors[z]
    }

    // ── Per-piece views ─────────────────────────────────────────

    /// Zones owned by `piece`, in increasing order.
    pub fn piece_zones(&self, piece: PieceId) -> Vec<usize> {
        self.zone_colors
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == piece)
            .map(|(z, _)| z)
            .collect()
    }

    /// Points `piece` owns outright or shares, in increasing order.
    pub fn piece_points(&self, piece: PieceId) -> Vec<usize> {
        (0..self.point_count())
            .filter(|&p| self.point_owners(p).contains(&piece))
            .collect()
    }
}
