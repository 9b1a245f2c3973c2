//! Content digest of a generated mesh.
//!
//! FNV-1a over every output sequence. Not cryptographic: the digest is for
//! cheap equality checks, e.g. comparing a cached mesh against a fresh
//! generation or pinning a regression baseline.

use crate::mesh::Mesh;
use crate::ownership::PointColor;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Digest of a mesh's coordinates, ownership and adjacency.
///
/// Coordinates are hashed by bit pattern, so two meshes have the same
/// digest only if every output sequence is bit-identical. The piece
/// layout is included as well.
pub fn mesh_digest(mesh: &Mesh) -> u64 {
    let mut hash = FNV_OFFSET;
    let layout = mesh.layout();
    hash = fnv1a_u32(hash, layout.pieces_x);
    hash = fnv1a_u32(hash, layout.pieces_y);

    // Fold in a section index ahead of each sequence.
    hash = fnv1a_u32(hash, 0);
    for (&x, &y) in mesh.point_x().iter().zip(mesh.point_y()) {
        hash = fnv1a_u64(hash, x.to_bits());
        hash = fnv1a_u64(hash, y.to_bits());
    }

    hash = fnv1a_u32(hash, 1);
    for color in mesh.point_colors() {
        hash = match color {
            PointColor::Owned(id) => fnv1a_u32(fnv1a_byte(hash, 0), id.0),
            PointColor::Shared => fnv1a_byte(hash, 1),
        };
    }

    hash = fnv1a_u32(hash, 2);
    for (p, owners) in mesh.shared_points() {
        hash = fnv1a_u64(hash, p as u64);
        hash = fnv1a_u32(hash, owners.len() as u32);
        for owner in owners {
            hash = fnv1a_u32(hash, owner.0);
        }
    }

    hash = fnv1a_u32(hash, 3);
    for &size in mesh.zone_size() {
        hash = fnv1a_u32(hash, size as u32);
    }

    hash = fnv1a_u32(hash, 4);
    for &p in mesh.zone_point_list() {
        hash = fnv1a_u64(hash, p as u64);
    }

    hash = fnv1a_u32(hash, 5);
    for color in mesh.zone_colors() {
        hash = fnv1a_u32(hash, color.0);
    }

    hash
}
