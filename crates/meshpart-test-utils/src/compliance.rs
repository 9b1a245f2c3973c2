//! Mesh invariant checks.
//!
//! Each function asserts one property every generated mesh must satisfy.
//! Reused by the integration tests of the facade and marshal crates.

use indexmap::IndexSet;
use meshpart_core::{MeshConfig, PieceId, Topology};
use meshpart_mesh::{Mesh, PointColor};

/// Assert point and zone counts match what the configuration predicts.
pub fn assert_counts_match_config(mesh: &Mesh, config: &MeshConfig) {
    assert_eq!(
        mesh.point_count(),
        config.point_count(),
        "point count for {config:?}"
    );
    assert_eq!(
        mesh.zone_count(),
        config.zone_count(),
        "zone count for {config:?}"
    );
    assert_eq!(mesh.layout().piece_count(), config.pieces);
}

/// Assert `zone_start[z] == sum(zone_size[..z])` and the flat list length
/// equals the total of all sizes.
pub fn assert_adjacency_run_length(mesh: &Mesh) {
    let mut offset = 0;
    for (z, (&start, &size)) in mesh.zone_start().iter().zip(mesh.zone_size()).enumerate() {
        assert_eq!(start, offset, "zone {z} starts at {start}, expected {offset}");
        offset += size;
    }
    assert_eq!(
        offset,
        mesh.zone_point_list().len(),
        "zone sizes sum to {offset}, flat list has {}",
        mesh.zone_point_list().len()
    );
}

/// Assert every zone has between 3 and the topology's maximum arity points.
pub fn assert_zone_arity(mesh: &Mesh, topology: Topology) {
    let max = topology.max_zone_arity();
    for (z, &size) in mesh.zone_size().iter().enumerate() {
        assert!(
            (3..=max).contains(&size),
            "zone {z} has {size} points, expected 3..={max}"
        );
    }
}

/// Assert every zone references existing, pairwise distinct points.
pub fn assert_zone_points_valid(mesh: &Mesh) {
    for z in 0..mesh.zone_count() {
        let points = mesh.zone_points(z);
        for &p in points {
            assert!(
                p < mesh.point_count(),
                "zone {z} references point {p}, only {} exist",
                mesh.point_count()
            );
        }
        let unique: IndexSet<_> = points.iter().collect();
        assert_eq!(unique.len(), points.len(), "zone {z} repeats a point: {points:?}");
    }
}

/// Assert every point is referenced by at least one zone.
pub fn assert_points_referenced(mesh: &Mesh) {
    let used: IndexSet<usize> = mesh.zone_point_list().iter().copied().collect();
    assert_eq!(
        used.len(),
        mesh.point_count(),
        "{} of {} points belong to no zone",
        mesh.point_count() - used.len(),
        mesh.point_count()
    );
}

/// Assert every owner, single or shared, names an existing piece.
pub fn assert_colors_in_range(mesh: &Mesh, pieces: u32) {
    for (z, color) in mesh.zone_colors().iter().enumerate() {
        assert!(color.0 < pieces, "zone {z} owned by {color}, only {pieces} pieces");
    }
    for p in 0..mesh.point_count() {
        for owner in mesh.point_owners(p) {
            assert!(owner.0 < pieces, "point {p} owned by {owner}, only {pieces} pieces");
        }
    }
}

/// Assert the `Shared` tags and the owner map agree, and every owner list
/// is strictly ascending with at least two entries.
pub fn assert_shared_points_consistent(mesh: &Mesh) {
    let tagged: Vec<usize> = (0..mesh.point_count())
        .filter(|&p| mesh.point_color(p) == PointColor::Shared)
        .collect();
    let mapped: Vec<usize> = mesh.shared_points().map(|(p, _)| p).collect();
    assert_eq!(tagged, mapped, "shared tags disagree with the owner map");

    for (p, owners) in mesh.shared_points() {
        assert!(owners.len() >= 2, "shared point {p} has owners {owners:?}");
        assert!(
            owners.windows(2).all(|w| w[0] < w[1]),
            "owners of point {p} not strictly ascending: {owners:?}"
        );
    }
}

/// Assert all points lie inside the physical domain.
///
/// Rect and hex meshes fill `[0, len_x] × [0, len_y]`; a pie mesh lies
/// within the disc of radius `len_y`.
pub fn assert_points_in_domain(mesh: &Mesh, config: &MeshConfig) {
    const EPS: f64 = 1e-9;
    for p in 0..mesh.point_count() {
        let (x, y) = mesh.point(p);
        match config.topology {
            Topology::Pie => {
                let r = x.hypot(y);
                assert!(r <= config.len_y + EPS, "point {p} at radius {r}");
            }
            Topology::Rect | Topology::Hex => {
                assert!(
                    (-EPS..=config.len_x + EPS).contains(&x)
                        && (-EPS..=config.len_y + EPS).contains(&y),
                    "point {p} at ({x}, {y}) outside the domain"
                );
            }
        }
    }
}

/// Assert every point of a zone is owned by, or shared with, the zone's
/// piece.
///
/// Holds for the quad-based topologies whenever each piece gets at least
/// one zone along both axes.
pub fn assert_zone_points_touch_owner(mesh: &Mesh) {
    for z in 0..mesh.zone_count() {
        let owner: PieceId = mesh.zone_color(z);
        for &p in mesh.zone_points(z) {
            assert!(
                mesh.point_owners(p).contains(&owner),
                "zone {z} of {owner} uses point {p} owned by {:?}",
                mesh.point_owners(p)
            );
        }
    }
}

/// Run every applicable check on a mesh generated from `config`.
pub fn run_full_compliance(mesh: &Mesh, config: &MeshConfig) {
    assert_counts_match_config(mesh, config);
    assert_adjacency_run_length(mesh);
    assert_zone_arity(mesh, config.topology);
    assert_zone_points_valid(mesh);
    assert_points_referenced(mesh);
    assert_colors_in_range(mesh, config.pieces);
    assert_shared_points_consistent(mesh);
    assert_points_in_domain(mesh, config);

    let layout = mesh.layout();
    let one_zone_per_piece = layout.pieces_x <= config.zones_x && layout.pieces_y <= config.zones_y;
    if config.topology != Topology::Hex && one_zone_per_piece {
        assert_zone_points_touch_owner(mesh);
    }
}
