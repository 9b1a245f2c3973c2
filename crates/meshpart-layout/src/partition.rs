//! The derived partition of one mesh request.

use crate::bounds::AxisBounds;
use crate::planner::{plan_layout, PieceLayout};
use meshpart_core::{ConfigError, MeshConfig, PieceId};

/// Piece grid plus per-axis boundaries, derived from a [`MeshConfig`].
///
/// Kept separate from the configuration: planning reads the request and
/// produces this value, it never fills in fields of the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    /// Shape of the piece grid.
    pub layout: PieceLayout,
    /// Column breakpoints over the zone grid's x axis.
    pub bounds_x: AxisBounds,
    /// Row breakpoints over the zone grid's y axis.
    pub bounds_y: AxisBounds,
}

impl Partition {
    /// Validate `config` and plan its partition.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`MeshConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use meshpart_core::MeshConfig;
    /// use meshpart_layout::Partition;
    ///
    /// let config = MeshConfig::builder().pieces(2).zones(2, 1).build().unwrap();
    /// let partition = Partition::plan(&config).unwrap();
    /// assert_eq!(partition.layout.pieces_x, 2);
    /// assert_eq!(partition.bounds_x.len(), 3);
    /// assert_eq!(partition.bounds_y.len(), 2);
    /// ```
    pub fn plan(config: &MeshConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = plan_layout(config.pieces, config.zones_x, config.zones_y)?;
        Ok(Self {
            bounds_x: AxisBounds::new(layout.pieces_x, config.zones_x),
            bounds_y: AxisBounds::new(layout.pieces_y, config.zones_y),
            layout,
        })
    }

    /// Piece-grid columns.
    pub fn pieces_x(&self) -> u32 {
        self.layout.pieces_x
    }

    /// Total number of pieces.
    pub fn piece_count(&self) -> u32 {
        self.layout.piece_count()
    }

    /// Piece at piece-grid position `(pcx, pcy)`.
    pub fn piece_id(&self, pcx: u32, pcy: u32) -> PieceId {
        PieceId::from_grid(pcx, pcy, self.layout.pieces_x)
    }
}
