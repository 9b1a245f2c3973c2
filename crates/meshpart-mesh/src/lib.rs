//! Partitioned mesh generation.
//!
//! [`generate`] turns a [`MeshConfig`](meshpart_core::MeshConfig) into a
//! [`Mesh`]: point coordinates, zone→point adjacency in run-length form,
//! and piece ownership for every point and zone.
//!
//! # Topologies
//!
//! - **Rect**: `(nx+1) * (ny+1)` grid points, every zone a quad
//! - **Pie**: polar wedge whose first row collapses to an apex; first-row
//!   zones are triangles, the rest quads
//! - **Hex**: interior grid nodes doubled into point pairs, outer rows and
//!   columns single; zones have 4 to 6 points
//!
//! # Ownership
//!
//! Zones belong to exactly one piece. Points on a piece boundary are
//! [`PointColor::Shared`] and carry an ordered owner list, available from
//! [`Mesh::point_owners`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod builder;
mod grid;
mod hex;
mod pie;
mod rect;

pub mod generate;
pub mod hash;
pub mod mesh;
pub mod ownership;

pub use generate::generate;
pub use hash::mesh_digest;
pub use mesh::Mesh;
pub use ownership::{OwnerList, PointColor};
