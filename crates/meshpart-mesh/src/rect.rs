//! Rectangular mesh: a regular grid of quads.

use crate::builder::MeshBuilder;
use crate::grid;
use crate::ownership::ColorAssigner;
use meshpart_core::MeshConfig;
use meshpart_layout::Partition;

pub(crate) fn generate(config: &MeshConfig, partition: &Partition, mesh: &mut MeshBuilder) {
    let nx = config.zones_x;
    let ny = config.zones_y;
    let npx = nx as usize + 1;
    let dx = config.len_x / nx as f64;
    let dy = config.len_y / ny as f64;
    let colors = ColorAssigner::new(partition.pieces_x());

    grid::walk(partition, nx + 1, ny + 1, |i, j, x, y| {
        mesh.push_point(dx * i as f64, dy * j as f64, colors.quad_point(x, y));
    });

    grid::walk(partition, nx, ny, |i, j, x, y| {
        let p0 = j as usize * npx + i as usize;
        mesh.push_zone(&[p0, p0 + 1, p0 + npx + 1, p0 + npx], colors.piece(x, y));
    });
}
