//! Marshaling errors.

use meshpart_core::ConfigError;
use std::error::Error;
use std::fmt;

/// One caller-supplied output buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    /// Point x coordinates.
    PointX,
    /// Point y coordinates.
    PointY,
    /// Point ownership tags.
    PointColors,
    /// Zone start offsets.
    ZoneStart,
    /// Zone point counts.
    ZoneSize,
    /// Flat zone point list.
    ZonePoints,
    /// Zone owners.
    ZoneColors,
    /// Indices of shared points.
    SharedPoints,
    /// Owner-list length of each shared point.
    SharedSize,
    /// Flat owner list of all shared points.
    SharedOwners,
}

impl OutputSlot {
    /// Short name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::PointX => "point_x",
            Self::PointY => "point_y",
            Self::PointColors => "point_colors",
            Self::ZoneStart => "zone_start",
            Self::ZoneSize => "zone_size",
            Self::ZonePoints => "zone_points",
            Self::ZoneColors => "zone_colors",
            Self::SharedPoints => "shared_points",
            Self::SharedSize => "shared_size",
            Self::SharedOwners => "shared_owners",
        }
    }
}

impl fmt::Display for OutputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from [`generate_into`](crate::generate_into) and the marshaling
/// functions.
#[derive(Clone, Debug, PartialEq)]
pub enum MarshalError {
    /// The request did not describe a valid mesh.
    Config(ConfigError),
    /// A caller buffer cannot hold the data destined for it. Nothing was
    /// written to any buffer.
    BufferTooSmall {
        /// The first buffer found too small.
        buffer: OutputSlot,
        /// Elements the mesh needs in that buffer.
        required: usize,
        /// Elements the buffer holds.
        capacity: usize,
    },
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid mesh request: {e}"),
            Self::BufferTooSmall {
                buffer,
                required,
                capacity,
            } => write!(
                f,
                "{buffer} buffer too small: {capacity} < {required}"
            ),
        }
    }
}

impl Error for MarshalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::BufferTooSmall { .. } => None,
        }
    }
}

impl From<ConfigError> for MarshalError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
