//! Configuration errors.

use std::error::Error;
use std::fmt;

/// Errors detected while validating or converting a mesh request.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The requested piece count is zero.
    NoPieces,
    /// One of the zone-grid dimensions is zero.
    EmptyGrid,
    /// A dimension, or a total count derived from the dimensions, exceeds
    /// what the exported index type or a single buffer can address.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
    /// A raw integer field was negative.
    NegativeValue {
        /// Which field.
        name: &'static str,
        /// The offending value.
        value: i64,
    },
    /// A physical extent is NaN, infinite, zero, or negative.
    InvalidExtent {
        /// Which extent.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The raw topology selector is not one of the known tags.
    UnknownTopology {
        /// The unrecognized tag.
        tag: i64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPieces => write!(f, "piece count must be at least 1"),
            Self::EmptyGrid => write!(f, "zone grid must have at least one zone per axis"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::NegativeValue { name, value } => {
                write!(f, "{name} must be non-negative, got {value}")
            }
            Self::InvalidExtent { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::UnknownTopology { tag } => write!(f, "unknown topology tag {tag}"),
        }
    }
}

impl Error for ConfigError {}
