//! In-memory implementations for mdal-rs.
//!
//! This crate provides concrete, value-holding counterparts to the core
//! traits:
//! - [`MemoryGeometry`] - vertices and faces with batch cursors
//! - [`MemoryDataset2D`] - values on vertices or faces, with optional active flags
//! - [`MemoryDataset3D`] - values on volumes stacked over faces

// Indices and counts cross the i32 boundary of the cursor and accessor API
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod buffer;
pub mod dataset_2d;
pub mod dataset_3d;
pub mod geometry;

pub use dataset_2d::MemoryDataset2D;
pub use dataset_3d::MemoryDataset3D;
pub use geometry::{MemoryFaceIterator, MemoryGeometry, MemoryVertexIterator};
