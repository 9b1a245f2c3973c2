//! meshpart: partitioned 2-D mesh generation.
//!
//! Generates a synthetic unstructured mesh (wedge, rectangular or
//! hexagonal) and, in the same pass, splits it into a grid of near-square
//! pieces. Every zone belongs to one piece; points on piece boundaries are
//! shared and carry an ordered owner list.
//!
//! This is the facade crate that re-exports the public API of the
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use meshpart::prelude::*;
//!
//! let config = MeshConfig::builder()
//!     .pieces(4)
//!     .zones(8, 8)
//!     .extent(1.0, 1.0)
//!     .topology(Topology::Hex)
//!     .build()
//!     .unwrap();
//! let mesh = generate(&config).unwrap();
//! assert_eq!(mesh.layout(), PieceLayout { pieces_x: 2, pieces_y: 2 });
//! assert_eq!(mesh.zone_count(), 64);
//!
//! // Copy the mesh into caller-owned buffers.
//! let mut owned = OwnedBuffers::for_config(&config);
//! let sizes = marshal(&mesh, &mut owned.as_buffers()).unwrap();
//! owned.truncate(sizes);
//! assert_eq!(owned.point_x.len(), mesh.point_count());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `meshpart-core` | Configuration, topology selector, ids, config errors |
//! | [`layout`] | `meshpart-layout` | Piece-grid planning and per-axis boundaries |
//! | [`mesh`] | `meshpart-mesh` | Mesh generators, ownership, digests |
//! | [`marshal`] | `meshpart-marshal` | Copying meshes into caller buffers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Configuration, topology selector and ids (`meshpart-core`).
pub use meshpart_core as types;

/// Piece layout planning and boundary indexing (`meshpart-layout`).
///
/// [`layout::plan_layout`] picks the piece grid; [`layout::AxisBounds`]
/// records where ownership changes along each axis.
pub use meshpart_layout as layout;

/// Mesh generation and ownership (`meshpart-mesh`).
pub use meshpart_mesh as mesh;

/// Marshaling into fixed-capacity caller buffers (`meshpart-marshal`).
///
/// [`marshal::generate_into`] is the one-call path from raw scalars to
/// filled buffers.
pub use meshpart_marshal as marshal;

/// Common imports for typical meshpart usage.
///
/// ```rust
/// use meshpart::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use meshpart_core::{ConfigError, MeshConfig, PieceId, RawMeshRequest, Topology};

    // Layout
    pub use meshpart_layout::{plan_layout, Partition, PieceLayout};

    // Mesh
    pub use meshpart_mesh::{generate, mesh_digest, Mesh, PointColor};

    // Marshaling
    pub use meshpart_marshal::{
        generate_into, marshal, MarshalError, OutputBuffers, OutputSizes, OwnedBuffers,
        MULTICOLOR,
    };
}
