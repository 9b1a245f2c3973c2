//! Hexagonal mesh built from a perturbed point grid.
//!
//! Nodes on the outer rows and columns are single points. Every interior
//! node is split into an up-left / down-right pair, so interior rows hold
//! two points per node and rows have different lengths; `row_base[j]`
//! tracks where row `j` starts. Zones take three points from the row below
//! and three from the row above, minus those that do not exist along the
//! mesh boundary.

use crate::builder::MeshBuilder;
use crate::grid;
use crate::ownership::ColorAssigner;
use meshpart_core::MeshConfig;
use meshpart_layout::Partition;
use smallvec::SmallVec;

pub(crate) fn generate(config: &MeshConfig, partition: &Partition, mesh: &mut MeshBuilder) {
    let nx = config.zones_x;
    let ny = config.zones_y;
    let (len_x, len_y) = (config.len_x, config.len_y);
    // A single-zone axis gives infinite spacing; the clamp below then pins
    // its points to the two ends of the axis.
    let dx = len_x / (nx - 1) as f64;
    let dy = len_y / (ny - 1) as f64;
    let colors = ColorAssigner::new(partition.pieces_x());

    let mut row_base = Vec::with_capacity(ny as usize + 1);
    grid::walk(partition, nx + 1, ny + 1, |i, j, xs, ys| {
        if i == 0 {
            row_base.push(mesh.point_count());
        }
        let x = (dx * (i as f64 - 0.5)).clamp(0.0, len_x);
        let y = (dy * (j as f64 - 0.5)).clamp(0.0, len_y);
        if i == 0 || i == nx || j == 0 || j == ny {
            mesh.push_point(x, y, colors.hex_edge_point(xs, ys));
        } else {
            let (first, second) = colors.hex_point_pair(xs, ys);
            mesh.push_point(x - dx / 6.0, y + dy / 6.0, first);
            mesh.push_point(x + dx / 6.0, y - dy / 6.0, second);
        }
    });

    grid::walk(partition, nx, ny, |i, j, xs, ys| {
        let (i, j) = (i as usize, j as usize);
        let points = zone_points(
            i,
            j,
            nx as usize,
            ny as usize,
            row_base[j],
            row_base[j + 1],
        );
        mesh.push_zone(&points, colors.piece(xs, ys));
    });
}

/// Points of zone `(i, j)` given the first point of its lower row `lo` and
/// upper row `hi`.
///
/// The full pattern is `[a-1, a, a+1, h+2, h+1, h]` with `a = lo + 2i` and
/// `h = hi + 2i`: three points along the lower row, then three along the
/// upper row walking back. The bottom and top rows are single-point rows,
/// so there the pattern collapses to two points on that side, and the
/// first and last columns lose the point that would lie outside the mesh.
/// The four trims are independent, so a single row or column of zones
/// yields quads.
fn zone_points(
    i: usize,
    j: usize,
    nx: usize,
    ny: usize,
    lo: usize,
    hi: usize,
) -> SmallVec<[usize; 6]> {
    let mut v: SmallVec<[usize; 6]> = SmallVec::new();
    if j == 0 {
        v.extend([lo + i, lo + i + 1]);
    } else {
        let a = lo + 2 * i;
        if i > 0 {
            v.push(a - 1);
        }
        v.extend([a, a + 1]);
    }
    if j == ny - 1 {
        v.extend([hi + i + 1, hi + i]);
    } else {
        let h = hi + 2 * i;
        if i < nx - 1 {
            v.push(h + 2);
        }
        v.extend([h + 1, h]);
    }
    v
}
