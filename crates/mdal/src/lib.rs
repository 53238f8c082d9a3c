//! mdal-rs: a Rust-native data model for unstructured meshes and the
//! time-varying simulation results attached to them.
//!
//! # Quick Start
//!
//! ```
//! use mdal_rs::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let geometry = MemoryGeometry::new(
//!         vec![
//!             DVec3::new(0.0, 0.0, 0.0),
//!             DVec3::new(1.0, 0.0, 0.0),
//!             DVec3::new(0.0, 1.0, 0.0),
//!         ],
//!         vec![vec![0, 1, 2]],
//!     );
//!     let mut mesh = geometry.into_mesh("memory", "triangle")?;
//!
//!     let group = DatasetGroup::with_name("memory", &mesh, "triangle", "depth");
//!     let group = mesh.add_dataset_group(group)?;
//!     let mut dataset = MemoryDataset2D::new(group, false);
//!     dataset.values_mut().copy_from_slice(&[0.5, 1.0, 1.5]);
//!     dataset.set_is_valid(true);
//!     group.add_dataset(Box::new(dataset))?;
//!
//!     let depth = mesh.group("depth").and_then(|g| g.dataset(0)).unwrap();
//!     assert_eq!(read_doubles(depth, DataType::ScalarDouble, 2)?, vec![0.5, 1.0, 1.5]);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! A **mesh** owns **dataset groups**; a group owns **datasets**, one per time
//! step. Groups fix where values live (vertices, faces or volumes) and whether
//! they are scalars or vectors before the first dataset is added. The number
//! of values of a dataset is always derived from that location and the mesh
//! topology.
//!
//! - [`Mesh`] - topology size, extent, source and coordinate system
//! - [`DatasetGroup`] - metadata, statistics, reference time, edit mode
//! - [`Dataset`] - one time step; [`Dataset2D`] and [`Dataset3D`] are empty
//!   placeholders, [`MemoryDataset2D`] and [`MemoryDataset3D`] hold values

mod read;

pub use mdal_core::{
    dataset::{DataBuffer, Dataset, Dataset2D, Dataset3D, DatasetKind, DatasetState},
    error::{MdalError, Result},
    extent::BBox,
    group::{DatasetGroup, NAME_KEY},
    handle::{GroupId, MeshId},
    info::{DatasetInfo, GroupInfo, MeshInfo},
    iterator::{MeshFaceIterator, MeshGeometry, MeshVertexIterator},
    location::{DataLocation, DataType},
    mesh::{Mesh, MeshTopology},
    metadata::Metadata,
    statistics::Statistics,
    view::{DatasetRef, GroupRef},
    DVec2, DVec3,
};

pub use mdal_memory::{
    MemoryDataset2D, MemoryDataset3D, MemoryFaceIterator, MemoryGeometry, MemoryVertexIterator,
};

pub use read::{read_doubles, read_integers, DEFAULT_CHUNK_SIZE};

/// Initializes `env_logger` for binaries and tests.
///
/// Honors `RUST_LOG`; calling it more than once is harmless.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("mdal-rs logging initialized");
    }
}
