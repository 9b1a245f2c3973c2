//! Strongly-typed piece identifier.

use std::fmt;

/// Identifies one piece of a partitioned mesh.
///
/// Pieces are numbered row-major over the piece grid: the piece in
/// piece-column `pcx` and piece-row `pcy` is `PieceId(pcy * pieces_x + pcx)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Piece at grid position `(pcx, pcy)` in a grid `pieces_x` wide.
    pub fn from_grid(pcx: u32, pcy: u32, pieces_x: u32) -> Self {
        Self(pcy * pieces_x + pcx)
    }

    /// The identifier as a `usize` index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PieceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_grid_is_row_major() {
        assert_eq!(PieceId::from_grid(0, 0, 3), PieceId(0));
        assert_eq!(PieceId::from_grid(2, 0, 3), PieceId(2));
        assert_eq!(PieceId::from_grid(0, 1, 3), PieceId(3));
        assert_eq!(PieceId::from_grid(1, 2, 3), PieceId(7));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(PieceId(42).to_string(), "42");
    }
}
