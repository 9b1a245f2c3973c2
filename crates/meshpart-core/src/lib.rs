//! Core types for the meshpart workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the layout planner, the mesh generators and the
//! marshaling layer: piece identifiers, the closed [`Topology`] selector,
//! the immutable [`MeshConfig`] input, and [`ConfigError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod id;
pub mod topology;

pub use config::{MeshConfig, MeshConfigBuilder, RawMeshRequest};
pub use error::ConfigError;
pub use id::PieceId;
pub use topology::Topology;
