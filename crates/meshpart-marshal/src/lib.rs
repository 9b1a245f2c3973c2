//! Marshaling of generated meshes into caller-owned buffers.
//!
//! A caller that sized its buffers up front (see [`OutputCapacity`]) hands
//! them over as [`OutputBuffers`]; [`marshal`] copies the mesh into them and
//! reports the sizes actually written. [`generate_into`] does validation,
//! generation and marshaling in one call from raw scalar inputs.
//!
//! Every buffer's capacity is checked before anything is written, so a
//! failed call leaves all buffers untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffers;
pub mod error;
pub mod marshal;

pub use buffers::{
    OutputBuffers, OutputCapacity, OutputSizes, OwnedBuffers, SharedOwnerBuffers,
    SharedOwnerSizes,
};
pub use error::{MarshalError, OutputSlot};
pub use marshal::{generate_into, marshal, marshal_shared_owners, MULTICOLOR};
