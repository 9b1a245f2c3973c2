//! Incremental construction of a [`Mesh`].

use crate::mesh::Mesh;
use crate::ownership::{OwnerList, Ownership, PointColor};
use indexmap::IndexMap;
use meshpart_core::PieceId;
use meshpart_layout::Partition;

/// Accumulates points and zones during the single generation pass.
pub(crate) struct MeshBuilder {
    point_x: Vec<f64>,
    point_y: Vec<f64>,
    point_colors: Vec<PointColor>,
    shared: IndexMap<usize, OwnerList>,
    zone_start: Vec<usize>,
    zone_size: Vec<usize>,
    zone_points: Vec<usize>,
    zone_colors: Vec<PieceId>,
}

impl MeshBuilder {
    pub(crate) fn with_capacity(points: usize, zones: usize, zone_points: usize) -> Self {
        Self {
            point_x: Vec::with_capacity(points),
            point_y: Vec::with_capacity(points),
            point_colors: Vec::with_capacity(points),
            shared: IndexMap::new(),
            zone_start: Vec::with_capacity(zones),
            zone_size: Vec::with_capacity(zones),
            zone_points: Vec::with_capacity(zone_points),
            zone_colors: Vec::with_capacity(zones),
        }
    }

    /// Number of points pushed so far, i.e. the index the next point gets.
    pub(crate) fn point_count(&self) -> usize {
        self.point_x.len()
    }

    pub(crate) fn push_point(&mut self, x: f64, y: f64, ownership: Ownership) {
        let index = self.point_x.len();
        self.point_x.push(x);
        self.point_y.push(y);
        match ownership {
            Ownership::Single(id) => self.point_colors.push(PointColor::Owned(id)),
            Ownership::Shared(owners) => {
                self.point_colors.push(PointColor::Shared);
                self.shared.insert(index, owners);
            }
        }
    }

    pub(crate) fn push_zone(&mut self, points: &[usize], color: PieceId) {
        self.zone_start.push(self.zone_points.len());
        self.zone_size.push(points.len());
        self.zone_points.extend_from_slice(points);
        self.zone_colors.push(color);
    }

    pub(crate) fn finish(self, partition: Partition) -> Mesh {
        Mesh {
            partition,
            point_x: self.point_x,
            point_y: self.point_y,
            point_colors: self.point_colors,
            shared: self.shared,
            zone_start: self.zone_start,
            zone_size: self.zone_size,
            zone_points: self.zone_points,
            zone_colors: self.zone_colors,
        }
    }
}
