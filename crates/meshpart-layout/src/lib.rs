//! Piece layout planning for partitioned meshes.
//!
//! A mesh of `zones_x * zones_y` zones is split into a grid of
//! `pieces_x * pieces_y` pieces. [`plan_layout`] picks the grid shape whose
//! pieces are closest to square, and [`AxisBounds`] records, per axis,
//! where ownership changes from one piece column (or row) to the next.
//!
//! # Boundaries
//!
//! Each axis carries `k + 1` [`Breakpoint`]s for `k` pieces. The outer two
//! are open ends ([`Breakpoint::Before`], [`Breakpoint::Beyond`]) that no
//! index can land on, so an [`AxisCursor`] walking the axis never needs a
//! special case for the first or last piece.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod partition;
pub mod planner;

pub use bounds::{AxisBounds, AxisCursor, AxisStep, Breakpoint};
pub use partition::Partition;
pub use planner::{plan_layout, PieceLayout};
