//! Shared mesh configurations.

use meshpart_core::{MeshConfig, RawMeshRequest, Topology};

/// A valid configuration with a 2×1 physical extent.
///
/// Panics on an invalid combination; fixtures are only built from known
/// good inputs.
pub fn config(topology: Topology, pieces: u32, nx: u32, ny: u32) -> MeshConfig {
    MeshConfig::builder()
        .pieces(pieces)
        .zones(nx, ny)
        .extent(2.0, 1.0)
        .topology(topology)
        .build()
        .expect("fixture config should be valid")
}

pub fn rect_config(pieces: u32, nx: u32, ny: u32) -> MeshConfig {
    config(Topology::Rect, pieces, nx, ny)
}

/// Quarter-circle wedge of unit radius.
pub fn pie_config(pieces: u32, nx: u32, ny: u32) -> MeshConfig {
    MeshConfig::builder()
        .pieces(pieces)
        .zones(nx, ny)
        .extent(std::f64::consts::FRAC_PI_2, 1.0)
        .topology(Topology::Pie)
        .build()
        .expect("fixture config should be valid")
}

pub fn hex_config(pieces: u32, nx: u32, ny: u32) -> MeshConfig {
    config(Topology::Hex, pieces, nx, ny)
}

/// The same grid and piece count under every topology.
pub fn all_topologies(pieces: u32, nx: u32, ny: u32) -> Vec<MeshConfig> {
    vec![
        pie_config(pieces, nx, ny),
        rect_config(pieces, nx, ny),
        hex_config(pieces, nx, ny),
    ]
}

/// The raw scalar form of `config`.
pub fn raw_request(config: &MeshConfig) -> RawMeshRequest {
    RawMeshRequest {
        pieces: config.pieces as i64,
        zones_x: config.zones_x as i64,
        zones_y: config.zones_y as i64,
        len_x: config.len_x,
        len_y: config.len_y,
        topology: config.topology.tag(),
    }
}

/// A spread of small configurations: square and skinny grids, prime and
/// composite piece counts, and more pieces than zones along an axis.
pub fn sweep() -> Vec<MeshConfig> {
    const CASES: [(u32, u32, u32); 10] = [
        (1, 1, 1),
        (1, 3, 2),
        (2, 2, 1),
        (3, 7, 5),
        (4, 4, 4),
        (4, 9, 3),
        (6, 12, 8),
        (7, 10, 10),
        (12, 5, 16),
        (5, 2, 2),
    ];
    CASES
        .iter()
        .flat_map(|&(pieces, nx, ny)| all_topologies(pieces, nx, ny))
        .collect()
}
