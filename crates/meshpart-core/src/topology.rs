//! The closed set of mesh shapes.

use crate::error::ConfigError;
use std::fmt;

/// Shape of the generated mesh.
///
/// The set is closed: a raw selector that is not one of the three known
/// tags is rejected by [`Topology::try_from`] instead of producing an
/// empty mesh.
///
/// # Examples
///
/// ```
/// use meshpart_core::{ConfigError, Topology};
///
/// assert_eq!(Topology::try_from(1i64), Ok(Topology::Rect));
/// assert_eq!(Topology::Hex.tag(), 2);
/// assert!(matches!(
///     Topology::try_from(7i64),
///     Err(ConfigError::UnknownTopology { tag: 7 })
/// ));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Wedge in polar coordinates with a degenerate apex row.
    Pie,
    /// Regular quadrilateral grid.
    Rect,
    /// Hexagonal cells built from doubled interior points.
    Hex,
}

impl Topology {
    /// Every topology, in tag order.
    pub const ALL: [Topology; 3] = [Topology::Pie, Topology::Rect, Topology::Hex];

    /// Raw selector used by the flat request interface.
    pub fn tag(self) -> i64 {
        match self {
            Self::Pie => 0,
            Self::Rect => 1,
            Self::Hex => 2,
        }
    }

    /// Largest number of points any single zone can reference.
    pub fn max_zone_arity(self) -> usize {
        match self {
            Self::Pie | Self::Rect => 4,
            Self::Hex => 6,
        }
    }

    /// Exact number of points generated for a `zones_x * zones_y` grid,
    /// saturating at `u64::MAX`.
    pub fn point_count(self, zones_x: u32, zones_y: u32) -> u64 {
        let nx = u128::from(zones_x);
        let ny = u128::from(zones_y);
        let count = match self {
            Self::Rect => (nx + 1) * (ny + 1),
            // Row 0 collapses to the apex.
            Self::Pie => (nx + 1) * ny + 1,
            // Outer rows keep one point per node, inner rows double the
            // interior nodes.
            Self::Hex => 2 * (nx + 1) + ny.saturating_sub(1) * 2 * nx,
        };
        u64::try_from(count).unwrap_or(u64::MAX)
    }
}

impl TryFrom<i64> for Topology {
    type Error = ConfigError;

    fn try_from(tag: i64) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Pie),
            1 => Ok(Self::Rect),
            2 => Ok(Self::Hex),
            _ => Err(ConfigError::UnknownTopology { tag }),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pie => write!(f, "pie"),
            Self::Rect => write!(f, "rect"),
            Self::Hex => write!(f, "hex"),
        }
    }
}
