//! Benchmark profiles for meshpart.
//!
//! - [`reference_profile`]: 320x320 zones (~100K) split into 64 pieces
//! - [`stress_profile`]: 1000x1000 zones (1M) split into 240 pieces

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use meshpart_core::{MeshConfig, Topology};

/// Reference profile: a 320x320 grid in 64 pieces over a unit square
/// (or a quarter wedge of unit radius for [`Topology::Pie`]).
pub fn reference_profile(topology: Topology) -> MeshConfig {
    profile(topology, 64, 320, 320)
}

/// Stress profile: a 1000x1000 grid in 240 pieces, which does not factor
/// into a square piece grid.
pub fn stress_profile(topology: Topology) -> MeshConfig {
    profile(topology, 240, 1000, 1000)
}

fn profile(topology: Topology, pieces: u32, nx: u32, ny: u32) -> MeshConfig {
    let len_x = match topology {
        Topology::Pie => std::f64::consts::FRAC_PI_2,
        Topology::Rect | Topology::Hex => 1.0,
    };
    MeshConfig {
        pieces,
        zones_x: nx,
        zones_y: ny,
        len_x,
        len_y: 1.0,
        topology,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        for topology in Topology::ALL {
            reference_profile(topology).validate().unwrap();
            stress_profile(topology).validate().unwrap();
        }
    }
}
