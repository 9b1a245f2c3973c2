//! Test utilities for meshpart development.
//!
//! [`fixtures`] builds the configurations the test suites share, and
//! [`compliance`] holds invariant checks that every generated [`Mesh`]
//! must pass, whatever its topology.
//!
//! [`Mesh`]: meshpart_mesh::Mesh

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

pub use compliance::run_full_compliance;
pub use fixtures::{all_topologies, config, hex_config, pie_config, raw_request, rect_config, sweep};
