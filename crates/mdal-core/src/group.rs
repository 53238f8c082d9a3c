//! Dataset groups: named series of datasets sharing location and shape.
//!
//! A [`DatasetGroup`] is created for a [`Mesh`] and later attached to it with
//! [`Mesh::add_dataset_group`]. The group remembers the id and topology of
//! that mesh; the topology is fixed at mesh construction, so the copy cannot
//! drift from its source.
//!
//! The data location and the scalar flag decide how datasets lay out their
//! storage. They can only be changed while the group holds no datasets.

use crate::dataset::Dataset;
use crate::error::{MdalError, Result};
use crate::handle::{GroupId, MeshId};
use crate::location::DataLocation;
use crate::mesh::{Mesh, MeshTopology};
use crate::metadata::Metadata;
use crate::statistics::Statistics;

/// Metadata key holding the group name.
pub const NAME_KEY: &str = "name";

/// A named, ordered collection of datasets on one mesh.
pub struct DatasetGroup {
    id: GroupId,
    driver_name: String,
    mesh_id: MeshId,
    topology: MeshTopology,
    uri: String,
    metadata: Metadata,
    statistics: Statistics,
    reference_time: String,
    data_location: DataLocation,
    is_scalar: bool,
    in_edit_mode: bool,
    datasets: Vec<Box<dyn Dataset>>,
}

impl DatasetGroup {
    /// Creates an unnamed group for `mesh`.
    ///
    /// The group starts scalar, on vertices, with no datasets and outside
    /// edit mode.
    pub fn new(driver_name: impl Into<String>, mesh: &Mesh, uri: impl Into<String>) -> Self {
        Self {
            id: GroupId::next(),
            driver_name: driver_name.into(),
            mesh_id: mesh.id(),
            topology: mesh.topology(),
            uri: uri.into(),
            metadata: Metadata::new(),
            statistics: Statistics::default(),
            reference_time: String::new(),
            data_location: DataLocation::default(),
            is_scalar: true,
            in_edit_mode: false,
            datasets: Vec::new(),
        }
    }

    /// Creates a group for `mesh` and stores `name` as its metadata name.
    pub fn with_name(
        driver_name: impl Into<String>,
        mesh: &Mesh,
        uri: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let mut group = Self::new(driver_name, mesh, uri);
        group.set_name(name);
        group
    }

    /// Returns the id datasets use to refer to this group.
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the id of the mesh this group was created for.
    pub fn mesh_id(&self) -> MeshId {
        self.mesh_id
    }

    /// Returns the topology of the mesh this group was created for.
    pub fn mesh_topology(&self) -> MeshTopology {
        self.topology
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    // === Metadata ===

    /// Returns the value stored under `key`, or an empty string if absent.
    pub fn get_metadata(&self, key: &str) -> &str {
        self.metadata.get(key).unwrap_or_default()
    }

    /// Updates the entry for `key`, or appends it if absent.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.set(key, value);
    }

    /// Returns all metadata in insertion order.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_count(&self) -> usize {
        self.metadata.len()
    }

    pub fn metadata_key(&self, index: usize) -> Option<&str> {
        self.metadata.key(index)
    }

    pub fn metadata_value(&self, index: usize) -> Option<&str> {
        self.metadata.value(index)
    }

    /// Group name, stored as metadata under [`NAME_KEY`].
    pub fn name(&self) -> &str {
        self.get_metadata(NAME_KEY)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.set_metadata(NAME_KEY, name);
    }

    // === Cached values ===

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn set_statistics(&mut self, statistics: Statistics) {
        self.statistics = statistics;
    }

    /// Free-form reference time; not parsed.
    pub fn reference_time(&self) -> &str {
        &self.reference_time
    }

    pub fn set_reference_time(&mut self, reference_time: impl Into<String>) {
        self.reference_time = reference_time.into();
    }

    // === Edit mode ===

    /// Returns whether a driver is currently populating this group.
    #[must_use]
    pub fn is_in_edit_mode(&self) -> bool {
        self.in_edit_mode
    }

    pub fn start_editing(&mut self) {
        self.in_edit_mode = true;
    }

    pub fn stop_editing(&mut self) {
        self.in_edit_mode = false;
    }

    // === Shape ===

    pub fn data_location(&self) -> DataLocation {
        self.data_location
    }

    /// Sets where values live.
    ///
    /// Fails with [`MdalError::DatasetsExist`] once any dataset was added.
    pub fn set_data_location(&mut self, data_location: DataLocation) -> Result<()> {
        self.ensure_no_datasets()?;
        self.data_location = data_location;
        Ok(())
    }

    pub fn is_scalar(&self) -> bool {
        self.is_scalar
    }

    /// Sets whether values are scalars or `(x, y)` vectors.
    ///
    /// Fails with [`MdalError::DatasetsExist`] once any dataset was added.
    pub fn set_is_scalar(&mut self, is_scalar: bool) -> Result<()> {
        self.ensure_no_datasets()?;
        self.is_scalar = is_scalar;
        Ok(())
    }

    fn ensure_no_datasets(&self) -> Result<()> {
        if self.datasets.is_empty() {
            return Ok(());
        }
        log::warn!(
            "rejected shape change on dataset group '{}' holding {} dataset(s)",
            self.name(),
            self.datasets.len()
        );
        Err(MdalError::DatasetsExist {
            group: self.name().to_string(),
            count: self.datasets.len(),
        })
    }

    /// Number of values `dataset` holds in this group.
    ///
    /// Vertices and faces come from the mesh topology, volumes from the
    /// dataset itself; any other location holds nothing.
    pub fn values_count(&self, dataset: &dyn Dataset) -> usize {
        self.data_location
            .values_count(self.topology, dataset.volumes_count())
    }

    // === Datasets ===

    /// Appends a dataset created for this group.
    ///
    /// Fails with [`MdalError::ForeignDataset`] for a dataset created for
    /// another group, and with [`MdalError::StaleDataset`] when the group's
    /// location or scalar flag changed after the dataset was created.
    pub fn add_dataset(&mut self, dataset: Box<dyn Dataset>) -> Result<()> {
        if dataset.group_id() != self.id {
            log::warn!("rejected dataset created for another group than '{}'", self.name());
            return Err(MdalError::ForeignDataset(self.name().to_string()));
        }
        let state = dataset.state();
        if state.data_location() != self.data_location || state.is_scalar() != self.is_scalar {
            log::warn!(
                "rejected dataset shaped as {:?}/scalar={} for group '{}' ({:?}/scalar={})",
                state.data_location(),
                state.is_scalar(),
                self.name(),
                self.data_location,
                self.is_scalar
            );
            return Err(MdalError::StaleDataset(self.name().to_string()));
        }
        self.datasets.push(dataset);
        log::debug!(
            "dataset group '{}' now holds {} dataset(s)",
            self.name(),
            self.datasets.len()
        );
        Ok(())
    }

    pub fn dataset(&self, index: usize) -> Option<&dyn Dataset> {
        self.datasets.get(index).map(|dataset| &**dataset)
    }

    /// Mutable access to a stored dataset. Replacing it goes through
    /// [`DatasetGroup::add_dataset`] only.
    pub fn dataset_mut(&mut self, index: usize) -> Option<&mut dyn Dataset> {
        self.datasets.get_mut(index).map(|dataset| &mut **dataset)
    }

    /// Returns the datasets in insertion order.
    pub fn datasets(&self) -> impl Iterator<Item = &dyn Dataset> {
        self.datasets.iter().map(|dataset| &**dataset)
    }

    pub fn datasets_count(&self) -> usize {
        self.datasets.len()
    }
}
