//! Output buffer views, sizes and capacity planning.

use crate::error::{MarshalError, OutputSlot};
use meshpart_core::MeshConfig;

// ── OutputBuffers ───────────────────────────────────────────────

/// Caller-owned destination slices for one mesh.
///
/// Each slice's length is its capacity. Indices and ownership tags are
/// written as `i64`, coordinates as `f64`.
#[derive(Debug)]
pub struct OutputBuffers<'a> {
    /// Point x coordinates.
    pub point_x: &'a mut [f64],
    /// Point y coordinates.
    pub point_y: &'a mut [f64],
    /// Owning piece per point, or [`MULTICOLOR`](crate::MULTICOLOR).
    pub point_colors: &'a mut [i64],
    /// Offset of each zone's first entry in `zone_points`.
    pub zone_start: &'a mut [i64],
    /// Number of points per zone.
    pub zone_size: &'a mut [i64],
    /// Flat zone point list.
    pub zone_points: &'a mut [i64],
    /// Owning piece per zone.
    pub zone_colors: &'a mut [i64],
}

impl OutputBuffers<'_> {
    /// Check that every buffer can take `sizes`, reporting the first that
    /// cannot.
    pub(crate) fn check(&self, sizes: OutputSizes) -> Result<(), MarshalError> {
        let required = [
            (OutputSlot::PointX, sizes.points, self.point_x.len()),
            (OutputSlot::PointY, sizes.points, self.point_y.len()),
            (OutputSlot::PointColors, sizes.points, self.point_colors.len()),
            (OutputSlot::ZoneStart, sizes.zones, self.zone_start.len()),
            (OutputSlot::ZoneSize, sizes.zones, self.zone_size.len()),
            (OutputSlot::ZonePoints, sizes.zone_points, self.zone_points.len()),
            (OutputSlot::ZoneColors, sizes.zones, self.zone_colors.len()),
        ];
        for (slot, n, capacity) in required {
            ensure_capacity(slot, n, capacity)?;
        }
        Ok(())
    }
}

/// Element counts actually written by [`marshal`](crate::marshal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OutputSizes {
    /// Entries written to each point buffer.
    pub points: usize,
    /// Entries written to the per-zone buffers.
    pub zones: usize,
    /// Entries written to the flat zone point list.
    pub zone_points: usize,
}

/// Buffer lengths guaranteed large enough for a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputCapacity {
    /// Length for each point buffer.
    pub points: usize,
    /// Length for the per-zone buffers.
    pub zones: usize,
    /// Length for the flat zone point list.
    pub zone_points: usize,
}

impl OutputCapacity {
    /// Capacities that always fit the mesh `config` generates.
    ///
    /// Point and zone counts are exact; the zone point list is bounded by
    /// the topology's largest zone arity.
    pub fn for_config(config: &MeshConfig) -> Self {
        Self {
            points: config.point_count(),
            zones: config.zone_count(),
            zone_points: config.zone_point_bound(),
        }
    }
}

// ── OwnedBuffers ────────────────────────────────────────────────

/// Heap-allocated buffers sized from an [`OutputCapacity`].
///
/// Lend them out with [`as_buffers`](Self::as_buffers), then
/// [`truncate`](Self::truncate) to the sizes reported by the marshaling
/// call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnedBuffers {
    /// Point x coordinates.
    pub point_x: Vec<f64>,
    /// Point y coordinates.
    pub point_y: Vec<f64>,
    /// Owning piece per point, or [`MULTICOLOR`](crate::MULTICOLOR).
    pub point_colors: Vec<i64>,
    /// Zone start offsets.
    pub zone_start: Vec<i64>,
    /// Zone point counts.
    pub zone_size: Vec<i64>,
    /// Flat zone point list.
    pub zone_points: Vec<i64>,
    /// Owning piece per zone.
    pub zone_colors: Vec<i64>,
}

impl OwnedBuffers {
    /// Zero-filled buffers of the given capacities.
    pub fn with_capacity(capacity: OutputCapacity) -> Self {
        Self {
            point_x: vec![0.0; capacity.points],
            point_y: vec![0.0; capacity.points],
            point_colors: vec![0; capacity.points],
            zone_start: vec![0; capacity.zones],
            zone_size: vec![0; capacity.zones],
            zone_points: vec![0; capacity.zone_points],
            zone_colors: vec![0; capacity.zones],
        }
    }

    /// Buffers large enough for the mesh `config` generates.
    pub fn for_config(config: &MeshConfig) -> Self {
        Self::with_capacity(OutputCapacity::for_config(config))
    }

    /// Borrow every buffer as an [`OutputBuffers`] view.
    pub fn as_buffers(&mut self) -> OutputBuffers<'_> {
        OutputBuffers {
            point_x: &mut self.point_x,
            point_y: &mut self.point_y,
            point_colors: &mut self.point_colors,
            zone_start: &mut self.zone_start,
            zone_size: &mut self.zone_size,
            zone_points: &mut self.zone_points,
            zone_colors: &mut self.zone_colors,
        }
    }

    /// Drop the unwritten tail of every buffer.
    pub fn truncate(&mut self, sizes: OutputSizes) {
        self.point_x.truncate(sizes.points);
        self.point_y.truncate(sizes.points);
        self.point_colors.truncate(sizes.points);
        self.zone_start.truncate(sizes.zones);
        self.zone_size.truncate(sizes.zones);
        self.zone_points.truncate(sizes.zone_points);
        self.zone_colors.truncate(sizes.zones);
    }
}

// ── Shared owners ───────────────────────────────────────────────

/// Destination slices for the shared-point owner map, in run-length form:
/// entry `s` of `points` and `sizes` describes one shared point, whose
/// owners are the next `sizes[s]` entries of `owners`.
#[derive(Debug)]
pub struct SharedOwnerBuffers<'a> {
    /// Index of each shared point.
    pub points: &'a mut [i64],
    /// Owner-list length of each shared point.
    pub sizes: &'a mut [i64],
    /// Flat owner list.
    pub owners: &'a mut [i64],
}

impl SharedOwnerBuffers<'_> {
    pub(crate) fn check(&self, sizes: SharedOwnerSizes) -> Result<(), MarshalError> {
        ensure_capacity(OutputSlot::SharedPoints, sizes.points, self.points.len())?;
        ensure_capacity(OutputSlot::SharedSize, sizes.points, self.sizes.len())?;
        ensure_capacity(OutputSlot::SharedOwners, sizes.owners, self.owners.len())
    }
}

/// Element counts written by [`marshal_shared_owners`](crate::marshal_shared_owners).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SharedOwnerSizes {
    /// Shared points written.
    pub points: usize,
    /// Owner entries written.
    pub owners: usize,
}

fn ensure_capacity(slot: OutputSlot, required: usize, capacity: usize) -> Result<(), MarshalError> {
    if capacity < required {
        return Err(MarshalError::BufferTooSmall {
            buffer: slot,
            required,
            capacity,
        });
    }
    Ok(())
}
