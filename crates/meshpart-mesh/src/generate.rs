//! Entry point: plan the partition and run the topology's generator.

use crate::builder::MeshBuilder;
use crate::mesh::Mesh;
use crate::{hex, pie, rect};
use meshpart_core::{ConfigError, MeshConfig, Topology};
use meshpart_layout::Partition;
use tracing::debug;

/// Generate the partitioned mesh described by `config`.
///
/// Deterministic: the same configuration always yields an identical mesh.
///
/// # Errors
///
/// Any [`ConfigError`] from validating `config`.
///
/// # Examples
///
/// ```
/// use meshpart_core::{MeshConfig, PieceId, Topology};
/// use meshpart_mesh::{generate, PointColor};
///
/// let config = MeshConfig::builder()
///     .pieces(2)
///     .zones(2, 1)
///     .topology(Topology::Rect)
///     .build()
///     .unwrap();
/// let mesh = generate(&config).unwrap();
///
/// assert_eq!(mesh.point_count(), 6);
/// assert_eq!(mesh.zone_count(), 2);
/// // Points on the vertical split between the two pieces are shared.
/// assert_eq!(mesh.point_color(1), PointColor::Shared);
/// assert_eq!(mesh.shared_owners(1), Some(&[PieceId(0), PieceId(1)][..]));
/// ```
pub fn generate(config: &MeshConfig) -> Result<Mesh, ConfigError> {
    let partition = Partition::plan(config)?;
    let mut builder = MeshBuilder::with_capacity(
        config.point_count(),
        config.zone_count(),
        config.zone_point_bound(),
    );

    match config.topology {
        Topology::Pie => pie::generate(config, &partition, &mut builder),
        Topology::Rect => rect::generate(config, &partition, &mut builder),
        Topology::Hex => hex::generate(config, &partition, &mut builder),
    }

    let mesh = builder.finish(partition);
    debug!(
        "Generated {} mesh: {} points ({} shared), {} zones, {}x{} pieces",
        config.topology,
        mesh.point_count(),
        mesh.shared_count(),
        mesh.zone_count(),
        mesh.layout().pieces_x,
        mesh.layout().pieces_y
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ownership::PointColor;
    use meshpart_core::PieceId;
    use proptest::prelude::*;

    fn config(topology: Topology, pieces: u32, nx: u32, ny: u32) -> MeshConfig {
        MeshConfig::builder()
            .pieces(pieces)
            .zones(nx, ny)
            .extent(2.0, 1.0)
            .topology(topology)
            .build()
            .unwrap()
    }

    fn assert_run_length(mesh: &Mesh) {
        let mut offset = 0;
        for z in 0..mesh.zone_count() {
            assert_eq!(mesh.zone_start()[z], offset, "zone {z} start");
            offset += mesh.zone_size()[z];
        }
        assert_eq!(offset, mesh.zone_point_list().len());
    }

    // ── Rect ────────────────────────────────────────────────────

    #[test]
    fn rect_2x2_single_piece() {
        let mesh = generate(&config(Topology::Rect, 1, 2, 2)).unwrap();
        assert_eq!(mesh.point_count(), 9);
        assert_eq!(mesh.zone_count(), 4);
        assert!(mesh.zone_size().iter().all(|&s| s == 4));
        assert!(mesh
            .point_colors()
            .iter()
            .all(|&c| c == PointColor::Owned(PieceId(0))));
        assert!(mesh.zone_colors().iter().all(|&c| c == PieceId(0)));
        assert_eq!(mesh.shared_count(), 0);
        assert_run_length(&mesh);
    }

    #[test]
    fn rect_coordinates() {
        let mesh = generate(&config(Topology::Rect, 1, 2, 2)).unwrap();
        assert_eq!(mesh.point(0), (0.0, 0.0));
        assert_eq!(mesh.point(2), (2.0, 0.0));
        assert_eq!(mesh.point(4), (1.0, 0.5));
        assert_eq!(mesh.point(8), (2.0, 1.0));
        assert_eq!(mesh.zone_points(3), &[4, 5, 8, 7]);
    }

    #[test]
    fn rect_vertical_split_shares_column() {
        let mesh = generate(&config(Topology::Rect, 2, 2, 1)).unwrap();
        let shared: Vec<usize> = mesh.shared_points().map(|(p, _)| p).collect();
        assert_eq!(shared, vec![1, 4]);
        for (_, owners) in mesh.shared_points() {
            assert_eq!(owners, &[PieceId(0), PieceId(1)]);
        }
        assert_eq!(mesh.point_color(0), PointColor::Owned(PieceId(0)));
        assert_eq!(mesh.point_color(2), PointColor::Owned(PieceId(1)));
        assert_eq!(mesh.zone_colors(), &[PieceId(0), PieceId(1)]);
    }

    #[test]
    fn rect_four_pieces_centre_point() {
        let mesh = generate(&config(Topology::Rect, 4, 4, 4)).unwrap();
        // Point (2, 2) is where all four pieces meet.
        assert_eq!(
            mesh.shared_owners(2 * 5 + 2),
            Some(&[PieceId(0), PieceId(1), PieceId(2), PieceId(3)][..])
        );
        // Point (2, 0) sits on the vertical split only.
        assert_eq!(mesh.shared_owners(2), Some(&[PieceId(0), PieceId(1)][..]));
        // Point (0, 2) sits on the horizontal split only.
        assert_eq!(
            mesh.shared_owners(2 * 5),
            Some(&[PieceId(0), PieceId(2)][..])
        );
        assert_eq!(mesh.shared_count(), 9);
    }

    // ── Pie ─────────────────────────────────────────────────────

    #[test]
    fn pie_apex_and_triangles() {
        let cfg = MeshConfig::builder()
            .pieces(1)
            .zones(4, 2)
            .extent(std::f64::consts::FRAC_PI_2, 1.0)
            .topology(Topology::Pie)
            .build()
            .unwrap();
        let mesh = generate(&cfg).unwrap();
        assert_eq!(mesh.point_count(), 5 * 2 + 1);
        assert_eq!(mesh.point(0), (0.0, 0.0));
        for z in 0..4 {
            assert_eq!(mesh.zone_size()[z], 3);
            assert_eq!(mesh.zone_points(z), &[0, z + 2, z + 1]);
        }
        for z in 4..8 {
            assert_eq!(mesh.zone_size()[z], 4);
        }
        assert_eq!(mesh.zone_points(4), &[1, 2, 7, 6]);
        assert_run_length(&mesh);
    }

    #[test]
    fn pie_angles_decrease_with_column() {
        let cfg = MeshConfig::builder()
            .zones(2, 1)
            .extent(std::f64::consts::FRAC_PI_2, 2.0)
            .topology(Topology::Pie)
            .build()
            .unwrap();
        let mesh = generate(&cfg).unwrap();
        // Column 0 at angle pi/2, column 2 at angle 0, radius 2.
        let (x0, y0) = mesh.point(1);
        let (x2, y2) = mesh.point(3);
        assert!(x0.abs() < 1e-12 && (y0 - 2.0).abs() < 1e-12);
        assert!((x2 - 2.0).abs() < 1e-12 && y2.abs() < 1e-12);
    }

    #[test]
    fn pie_apex_shared_by_first_piece_row() {
        let mesh = generate(&config(Topology::Pie, 2, 4, 1)).unwrap();
        assert_eq!(mesh.layout().pieces_x, 2);
        assert_eq!(mesh.point_color(0), PointColor::Shared);
        assert_eq!(mesh.shared_owners(0), Some(&[PieceId(0), PieceId(1)][..]));
    }

    // ── Hex ─────────────────────────────────────────────────────

    #[test]
    fn hex_2x2_layout() {
        let mesh = generate(&config(Topology::Hex, 1, 2, 2)).unwrap();
        assert_eq!(mesh.point_count(), 10);
        assert_eq!(mesh.zone_size(), &[5, 4, 4, 5]);
        assert_eq!(mesh.zone_points(0), &[0, 1, 5, 4, 3]);
        assert_eq!(mesh.zone_points(1), &[1, 2, 6, 5]);
        assert_eq!(mesh.zone_points(2), &[3, 4, 8, 7]);
        assert_eq!(mesh.zone_points(3), &[4, 5, 6, 9, 8]);
        assert_run_length(&mesh);
    }

    #[test]
    fn hex_points_clamped_and_perturbed() {
        // dx = 2 / 1, dy = 1 / 1.
        let mesh = generate(&config(Topology::Hex, 1, 2, 2)).unwrap();
        assert_eq!(mesh.point(0), (0.0, 0.0));
        assert_eq!(mesh.point(1), (1.0, 0.0));
        assert_eq!(mesh.point(2), (2.0, 0.0));
        assert_eq!(mesh.point(3), (0.0, 0.5));
        let (x, y) = mesh.point(4);
        assert!((x - (1.0 - 2.0 / 6.0)).abs() < 1e-12);
        assert!((y - (0.5 + 1.0 / 6.0)).abs() < 1e-12);
        let (x, y) = mesh.point(5);
        assert!((x - (1.0 + 2.0 / 6.0)).abs() < 1e-12);
        assert!((y - (0.5 - 1.0 / 6.0)).abs() < 1e-12);
        assert_eq!(mesh.point(9), (2.0, 1.0));
    }

    #[test]
    fn hex_single_zone_pins_corners() {
        let mesh = generate(&config(Topology::Hex, 1, 1, 1)).unwrap();
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.point(0), (0.0, 0.0));
        assert_eq!(mesh.point(1), (2.0, 0.0));
        assert_eq!(mesh.point(2), (0.0, 1.0));
        assert_eq!(mesh.point(3), (2.0, 1.0));
        assert_eq!(mesh.zone_points(0), &[0, 1, 3, 2]);
    }

    #[test]
    fn hex_single_zone_row_is_quads() {
        let mesh = generate(&config(Topology::Hex, 1, 2, 1)).unwrap();
        assert_eq!(mesh.point_count(), 6);
        assert_eq!(mesh.zone_points(0), &[0, 1, 4, 3]);
        assert_eq!(mesh.zone_points(1), &[1, 2, 5, 4]);
    }

    #[test]
    fn hex_corner_pair_ownership() {
        // 4 pieces on 4x4: breakpoints at 2 on both axes, so the interior
        // node (2, 2) is a split corner.
        let mesh = generate(&config(Topology::Hex, 4, 4, 4)).unwrap();
        // Row bases: 5, then 8 per interior row.
        let row2 = 5 + 8;
        // Node i=2 in an interior row: point 0 single, pairs start at 1.
        let first = row2 + 1 + 2 * (2 - 1);
        assert_eq!(
            mesh.shared_owners(first),
            Some(&[PieceId(0), PieceId(2), PieceId(3)][..])
        );
        assert_eq!(
            mesh.shared_owners(first + 1),
            Some(&[PieceId(0), PieceId(1), PieceId(3)][..])
        );
        // Bottom-row point on the vertical split: no diagonal.
        assert_eq!(mesh.shared_owners(2), Some(&[PieceId(0), PieceId(1)][..]));
    }

    // ── Oversized requests ──────────────────────────────────────

    #[test]
    fn oversized_grid_is_an_error_not_a_panic() {
        for topology in Topology::ALL {
            let config = MeshConfig {
                pieces: 4,
                zones_x: MeshConfig::MAX_DIM,
                zones_y: MeshConfig::MAX_DIM,
                len_x: 1.0,
                len_y: 1.0,
                topology,
            };
            assert!(
                matches!(
                    generate(&config),
                    Err(ConfigError::DimensionTooLarge { name: "point_count", .. })
                ),
                "{topology} accepted a {0}x{0} grid",
                MeshConfig::MAX_DIM
            );
        }
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_topology() -> impl Strategy<Value = Topology> {
        prop_oneof![
            Just(Topology::Pie),
            Just(Topology::Rect),
            Just(Topology::Hex),
        ]
    }

    proptest! {
        #[test]
        fn counts_and_adjacency_are_consistent(
            topology in arb_topology(),
            pieces in 1u32..12,
            nx in 1u32..12,
            ny in 1u32..12,
        ) {
            let cfg = config(topology, pieces, nx, ny);
            let mesh = generate(&cfg).unwrap();
            prop_assert_eq!(mesh.point_count(), cfg.point_count());
            prop_assert_eq!(mesh.zone_count(), cfg.zone_count());
            prop_assert!(mesh.zone_point_list().len() <= cfg.zone_point_bound());

            let mut offset = 0;
            for z in 0..mesh.zone_count() {
                prop_assert_eq!(mesh.zone_start()[z], offset);
                let size = mesh.zone_size()[z];
                prop_assert!((3..=6).contains(&size));
                offset += size;
            }
            prop_assert_eq!(offset, mesh.zone_point_list().len());
            prop_assert!(mesh.zone_point_list().iter().all(|&p| p < mesh.point_count()));
            prop_assert!(mesh.zone_colors().iter().all(|c| c.0 < pieces));
        }

        #[test]
        fn shared_points_match_map(
            topology in arb_topology(),
            pieces in 1u32..12,
            nx in 1u32..12,
            ny in 1u32..12,
        ) {
            let mesh = generate(&config(topology, pieces, nx, ny)).unwrap();
            let tagged = mesh.point_colors().iter().filter(|c| c.is_shared()).count();
            prop_assert_eq!(tagged, mesh.shared_count());
            let mut last = None;
            for (p, owners) in mesh.shared_points() {
                prop_assert_eq!(mesh.point_color(p), PointColor::Shared);
                prop_assert!(owners.len() >= 2);
                prop_assert!(owners.iter().all(|o| o.0 < pieces));
                prop_assert!(last.map_or(true, |l| l < p));
                last = Some(p);
            }
        }

        #[test]
        fn generation_is_deterministic(
            topology in arb_topology(),
            pieces in 1u32..12,
            nx in 1u32..12,
            ny in 1u32..12,
        ) {
            let cfg = config(topology, pieces, nx, ny);
            let a = generate(&cfg).unwrap();
            let b = generate(&cfg).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
