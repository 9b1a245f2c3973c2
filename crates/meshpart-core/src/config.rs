//! Mesh request configuration and validation.
//!
//! [`MeshConfig`] is the immutable input to mesh generation. Everything
//! derived from it (the piece grid, per-axis boundaries, point and zone
//! counts) lives in separate result types, so the caller's configuration
//! is never written back to.

use crate::error::ConfigError;
use crate::topology::Topology;

// ── MeshConfig ─────────────────────────────────────────────────────

/// Parameters of one mesh generation request.
///
/// For [`Topology::Pie`], `len_x` is the opening angle of the wedge in
/// radians and `len_y` its radius. For the other topologies both are
/// physical lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshConfig {
    /// Number of pieces the mesh is split into.
    pub pieces: u32,
    /// Zone-grid columns.
    pub zones_x: u32,
    /// Zone-grid rows.
    pub zones_y: u32,
    /// Extent along x (angle for the pie mesh).
    pub len_x: f64,
    /// Extent along y (radius for the pie mesh).
    pub len_y: f64,
    /// Mesh shape.
    pub topology: Topology,
}

impl MeshConfig {
    /// Maximum zone count per axis: point and zone indices are exported
    /// as `i64` and each axis must stay addressable by `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum point count, and maximum flat zone point list length, of
    /// one mesh. A buffer of that many 8-byte entries stays within
    /// `isize::MAX` bytes, so every index also fits `i64`.
    pub const MAX_ELEMENTS: u64 = isize::MAX as u64 / 8;

    /// Start building a configuration from defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use meshpart_core::{MeshConfig, Topology};
    ///
    /// let config = MeshConfig::builder()
    ///     .pieces(4)
    ///     .zones(8, 8)
    ///     .extent(1.0, 1.0)
    ///     .topology(Topology::Hex)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.zone_count(), 64);
    /// ```
    pub fn builder() -> MeshConfigBuilder {
        MeshConfigBuilder {
            pieces: 1,
            zones_x: 1,
            zones_y: 1,
            len_x: 1.0,
            len_y: 1.0,
            topology: Topology::Rect,
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoPieces`] if `pieces == 0`
    /// - [`ConfigError::EmptyGrid`] if either zone dimension is 0
    /// - [`ConfigError::DimensionTooLarge`] if a zone dimension exceeds [`Self::MAX_DIM`],
    ///   or the point count or zone point list length exceeds [`Self::MAX_ELEMENTS`]
    /// - [`ConfigError::InvalidExtent`] if an extent is not finite and positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pieces == 0 {
            return Err(ConfigError::NoPieces);
        }
        if self.zones_x == 0 || self.zones_y == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        for (name, value) in [("zones_x", self.zones_x), ("zones_y", self.zones_y)] {
            if value > Self::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value: value as u64,
                    max: u64::from(Self::MAX_DIM),
                });
            }
        }
        let zone_points = (self.zones_x as u64)
            .checked_mul(self.zones_y as u64)
            .and_then(|zones| zones.checked_mul(self.topology.max_zone_arity() as u64))
            .unwrap_or(u64::MAX);
        let totals = [
            ("point_count", self.topology.point_count(self.zones_x, self.zones_y)),
            ("zone_points", zone_points),
        ];
        for (name, value) in totals {
            if value > Self::MAX_ELEMENTS {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_ELEMENTS,
                });
            }
        }
        for (name, value) in [("len_x", self.len_x), ("len_y", self.len_y)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidExtent { name, value });
            }
        }
        Ok(())
    }

    /// Total number of zones.
    pub fn zone_count(&self) -> usize {
        (self.zones_x as usize).saturating_mul(self.zones_y as usize)
    }

    /// Exact number of points the selected topology generates.
    pub fn point_count(&self) -> usize {
        self.topology.point_count(self.zones_x, self.zones_y) as usize
    }

    /// Upper bound on the length of the flat zone point list.
    ///
    /// Saturates for configurations [`Self::validate`] rejects.
    pub fn zone_point_bound(&self) -> usize {
        self.zone_count().saturating_mul(self.topology.max_zone_arity())
    }
}

// ── MeshConfigBuilder ──────────────────────────────────────────────

/// Chained builder for [`MeshConfig`].
///
/// Defaults: one piece, a 1×1 grid, unit extents, rectangular topology.
#[derive(Clone, Debug)]
pub struct MeshConfigBuilder {
    pieces: u32,
    zones_x: u32,
    zones_y: u32,
    len_x: f64,
    len_y: f64,
    topology: Topology,
}

impl MeshConfigBuilder {
    /// Set the piece count.
    pub fn pieces(mut self, pieces: u32) -> Self {
        self.pieces = pieces;
        self
    }

    /// Set the zone-grid dimensions (columns, rows).
    pub fn zones(mut self, zones_x: u32, zones_y: u32) -> Self {
        self.zones_x = zones_x;
        self.zones_y = zones_y;
        self
    }

    /// Set the physical extents.
    pub fn extent(mut self, len_x: f64, len_y: f64) -> Self {
        self.len_x = len_x;
        self.len_y = len_y;
        self
    }

    /// Set the mesh topology (default: [`Topology::Rect`]).
    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Build the configuration, validating it.
    ///
    /// # Errors
    ///
    /// Any error from [`MeshConfig::validate`].
    pub fn build(self) -> Result<MeshConfig, ConfigError> {
        let config = MeshConfig {
            pieces: self.pieces,
            zones_x: self.zones_x,
            zones_y: self.zones_y,
            len_x: self.len_x,
            len_y: self.len_y,
            topology: self.topology,
        };
        config.validate()?;
        Ok(config)
    }
}

// ── RawMeshRequest ─────────────────────────────────────────────────

/// The flat scalar form of a request, as received from an untyped caller.
///
/// Converting it into a [`MeshConfig`] is where unknown topology tags and
/// negative counts are rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawMeshRequest {
    /// Requested piece count.
    pub pieces: i64,
    /// Zone-grid columns.
    pub zones_x: i64,
    /// Zone-grid rows.
    pub zones_y: i64,
    /// Extent along x.
    pub len_x: f64,
    /// Extent along y.
    pub len_y: f64,
    /// Topology selector: 0 = pie, 1 = rect, 2 = hex.
    pub topology: i64,
}

fn narrow(name: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeValue { name, value });
    }
    u32::try_from(value).map_err(|_| ConfigError::DimensionTooLarge {
        name,
        value: value as u64,
        max: u64::from(u32::MAX),
    })
}

impl TryFrom<&RawMeshRequest> for MeshConfig {
    type Error = ConfigError;

    fn try_from(raw: &RawMeshRequest) -> Result<Self, Self::Error> {
        let config = MeshConfig {
            pieces: narrow("pieces", raw.pieces)?,
            zones_x: narrow("zones_x", raw.zones_x)?,
            zones_y: narrow("zones_y", raw.zones_y)?,
            len_x: raw.len_x,
            len_y: raw.len_y,
            topology: Topology::try_from(raw.topology)?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(topology: i64) -> RawMeshRequest {
        RawMeshRequest {
            pieces: 4,
            zones_x: 8,
            zones_y: 6,
            len_x: 1.0,
            len_y: 0.5,
            topology,
        }
    }

    // ── Validation tests ────────────────────────────────────────

    #[test]
    fn builder_defaults_are_valid() {
        let config = MeshConfig::builder().build().unwrap();
        assert_eq!(config.pieces, 1);
        assert_eq!(config.topology, Topology::Rect);
        assert_eq!(config.zone_count(), 1);
        assert_eq!(config.point_count(), 4);
    }

    #[test]
    fn zero_pieces_rejected() {
        assert_eq!(
            MeshConfig::builder().pieces(0).build(),
            Err(ConfigError::NoPieces)
        );
    }

    #[test]
    fn zero_zones_rejected() {
        assert_eq!(
            MeshConfig::builder().zones(0, 3).build(),
            Err(ConfigError::EmptyGrid)
        );
        assert_eq!(
            MeshConfig::builder().zones(3, 0).build(),
            Err(ConfigError::EmptyGrid)
        );
    }

    #[test]
    fn oversized_dimension_rejected() {
        let big = MeshConfig::MAX_DIM + 1;
        assert!(matches!(
            MeshConfig::builder().zones(big, 1).build(),
            Err(ConfigError::DimensionTooLarge { name: "zones_x", .. })
        ));
        assert!(matches!(
            MeshConfig::builder().zones(1, big).build(),
            Err(ConfigError::DimensionTooLarge { name: "zones_y", .. })
        ));
    }

    #[test]
    fn largest_dimensions_rejected_by_total_size() {
        for topology in Topology::ALL {
            let result = MeshConfig::builder()
                .zones(MeshConfig::MAX_DIM, MeshConfig::MAX_DIM)
                .topology(topology)
                .build();
            assert!(
                matches!(
                    result,
                    Err(ConfigError::DimensionTooLarge { name: "point_count", max, .. })
                        if max == MeshConfig::MAX_ELEMENTS
                ),
                "{topology}: {result:?}"
            );
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn hex_zone_point_list_bounded() {
        // Few enough points, but six vertices per zone overshoot.
        let nx = MeshConfig::MAX_DIM;
        let ny = (MeshConfig::MAX_ELEMENTS / 6 / u64::from(nx)) as u32 + 1;
        let hex = MeshConfig::builder()
            .zones(nx, ny)
            .topology(Topology::Hex)
            .build();
        assert!(matches!(
            hex,
            Err(ConfigError::DimensionTooLarge { name: "zone_points", .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn large_grid_within_bounds_builds() {
        let config = MeshConfig::builder()
            .zones(1 << 20, 1 << 20)
            .topology(Topology::Hex)
            .build()
            .unwrap();
        assert_eq!(config.zone_point_bound(), 6 << 40);
    }

    #[test]
    fn unvalidated_sizes_saturate() {
        let config = MeshConfig {
            pieces: 1,
            zones_x: u32::MAX,
            zones_y: u32::MAX,
            len_x: 1.0,
            len_y: 1.0,
            topology: Topology::Hex,
        };
        assert!(config.validate().is_err());
        assert_eq!(config.point_count(), usize::MAX);
        assert_eq!(config.zone_point_bound(), usize::MAX);
    }

    #[test]
    fn bad_extents_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                MeshConfig::builder().extent(bad, 1.0).build(),
                Err(ConfigError::InvalidExtent { name: "len_x", .. })
            ));
            assert!(matches!(
                MeshConfig::builder().extent(1.0, bad).build(),
                Err(ConfigError::InvalidExtent { name: "len_y", .. })
            ));
        }
    }

    // ── Raw conversion tests ────────────────────────────────────

    #[test]
    fn raw_request_converts() {
        let config = MeshConfig::try_from(&raw(2)).unwrap();
        assert_eq!(config.pieces, 4);
        assert_eq!(config.zones_x, 8);
        assert_eq!(config.zones_y, 6);
        assert_eq!(config.topology, Topology::Hex);
        assert_eq!(config.zone_point_bound(), 6 * 48);
    }

    #[test]
    fn raw_unknown_topology_fails_loudly() {
        assert_eq!(
            MeshConfig::try_from(&raw(3)),
            Err(ConfigError::UnknownTopology { tag: 3 })
        );
    }

    #[test]
    fn raw_negative_count_rejected() {
        let mut r = raw(1);
        r.zones_y = -2;
        assert_eq!(
            MeshConfig::try_from(&r),
            Err(ConfigError::NegativeValue {
                name: "zones_y",
                value: -2
            })
        );
    }

    #[test]
    fn raw_count_beyond_u32_rejected() {
        let mut r = raw(1);
        r.pieces = u32::MAX as i64 + 1;
        assert!(matches!(
            MeshConfig::try_from(&r),
            Err(ConfigError::DimensionTooLarge { name: "pieces", .. })
        ));
    }

    #[test]
    fn error_display_mentions_field() {
        let err = ConfigError::InvalidExtent {
            name: "len_y",
            value: -3.0,
        };
        assert_eq!(err.to_string(), "len_y must be finite and positive, got -3");
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn valid_ranges_always_build(
            pieces in 1u32..64,
            nx in 1u32..200,
            ny in 1u32..200,
            lx in 0.001f64..1e6,
            ly in 0.001f64..1e6,
            tag in 0i64..3,
        ) {
            let request = RawMeshRequest {
                pieces: pieces as i64,
                zones_x: nx as i64,
                zones_y: ny as i64,
                len_x: lx,
                len_y: ly,
                topology: tag,
            };
            let config = MeshConfig::try_from(&request).unwrap();
            prop_assert_eq!(config.zone_count(), (nx * ny) as usize);
            prop_assert!(config.point_count() <= 2 * (nx as usize + 1) * (ny as usize + 1));
        }
    }
}
