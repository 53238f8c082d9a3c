//! Core data model for mdal-rs.
//!
//! This crate provides the entity graph shared by mesh drivers and consumers
//! of simulation results:
//! - [`Mesh`] with its topology size, extent, source and coordinate system
//! - [`DatasetGroup`] for a named series of datasets sharing location and shape
//! - [`Dataset`] trait for one time step of values, with the placeholder
//!   [`Dataset2D`] and [`Dataset3D`] variants
//! - [`GroupRef`] and [`DatasetRef`] views resolving children to their parents
//! - Geometry cursor traits implemented by geometry providers
//!
//! The model is a passive structure: it performs no I/O, no numerical work and
//! no locking. One driver populates a mesh, then any number of readers query
//! it.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Type names repeat their module (dataset::DatasetKind, mesh::MeshTopology)
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod error;
pub mod extent;
pub mod group;
pub mod handle;
pub mod info;
pub mod iterator;
pub mod location;
pub mod mesh;
pub mod metadata;
pub mod statistics;
pub mod view;

pub use dataset::{DataBuffer, Dataset, Dataset2D, Dataset3D, DatasetKind, DatasetState};
pub use error::{MdalError, Result};
pub use extent::BBox;
pub use group::{DatasetGroup, NAME_KEY};
pub use handle::{GroupId, MeshId};
pub use info::{DatasetInfo, GroupInfo, MeshInfo};
pub use iterator::{MeshFaceIterator, MeshGeometry, MeshVertexIterator};
pub use location::{DataLocation, DataType};
pub use mesh::{Mesh, MeshTopology};
pub use metadata::Metadata;
pub use statistics::Statistics;
pub use view::{DatasetRef, GroupRef};

// Re-export glam types for convenience
pub use glam::{DVec2, DVec3};
