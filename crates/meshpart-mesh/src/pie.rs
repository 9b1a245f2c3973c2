//! Pie mesh: a polar wedge with its first row collapsed onto the apex.
//!
//! `len_x` is the opening angle and `len_y` the radius. Column 0 sits at
//! the largest angle, so angles decrease as the column index grows.

use crate::builder::MeshBuilder;
use crate::grid;
use crate::ownership::ColorAssigner;
use meshpart_core::MeshConfig;
use meshpart_layout::Partition;

pub(crate) fn generate(config: &MeshConfig, partition: &Partition, mesh: &mut MeshBuilder) {
    let nx = config.zones_x;
    let ny = config.zones_y;
    let npx = nx as usize + 1;
    let dth = config.len_x / nx as f64;
    let dr = config.len_y / ny as f64;
    let colors = ColorAssigner::new(partition.pieces_x());

    grid::walk(partition, nx + 1, ny + 1, |i, j, x, y| {
        if j == 0 {
            // The whole row is the apex.
            if i == 0 {
                mesh.push_point(0.0, 0.0, colors.apex());
            }
            return;
        }
        let r = dr * j as f64;
        let th = dth * (nx - i) as f64;
        mesh.push_point(r * th.cos(), r * th.sin(), colors.quad_point(x, y));
    });

    grid::walk(partition, nx, ny, |i, j, x, y| {
        let i = i as usize;
        let piece = colors.piece(x, y);
        if j == 0 {
            mesh.push_zone(&[0, i + 2, i + 1], piece);
        } else {
            // Row j starts at 1 + (j - 1) * npx because row 0 is one point.
            let p0 = (j as usize - 1) * npx + i + 1;
            mesh.push_zone(&[p0, p0 + 1, p0 + npx + 1, p0 + npx], piece);
        }
    });
}
