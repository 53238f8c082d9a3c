//! Mesh: topology size, source identity and the dataset groups on it.

use serde::{Deserialize, Serialize};

use crate::error::{MdalError, Result};
use crate::extent::BBox;
use crate::group::DatasetGroup;
use crate::handle::MeshId;
use crate::iterator::{MeshFaceIterator, MeshGeometry, MeshVertexIterator};
use crate::view::GroupRef;

/// Element counts of a mesh, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeshTopology {
    /// Number of 2D vertices.
    pub vertices_count: usize,
    /// Number of 2D faces.
    pub faces_count: usize,
    /// Largest number of vertices in a single face.
    pub face_vertices_maximum_count: usize,
}

/// An unstructured mesh and the dataset groups defined on it.
///
/// The mesh owns its groups, and each group owns its datasets. Children
/// refer back to their parent through ids only; use [`Mesh::group`] or
/// [`Mesh::dataset_groups`] to get views that carry the parent along.
pub struct Mesh {
    id: MeshId,
    driver_name: String,
    topology: MeshTopology,
    extent: BBox,
    uri: String,
    crs: String,
    geometry: Option<Box<dyn MeshGeometry>>,
    dataset_groups: Vec<DatasetGroup>,
}

impl Mesh {
    /// Creates a mesh with final topology metrics and no dataset groups.
    pub fn new(
        driver_name: impl Into<String>,
        vertices_count: usize,
        faces_count: usize,
        face_vertices_maximum_count: usize,
        extent: BBox,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            id: MeshId::next(),
            driver_name: driver_name.into(),
            topology: MeshTopology {
                vertices_count,
                faces_count,
                face_vertices_maximum_count,
            },
            extent,
            uri: uri.into(),
            crs: String::new(),
            geometry: None,
            dataset_groups: Vec::new(),
        }
    }

    /// Returns the id groups use to refer to this mesh.
    pub fn id(&self) -> MeshId {
        self.id
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn topology(&self) -> MeshTopology {
        self.topology
    }

    pub fn vertices_count(&self) -> usize {
        self.topology.vertices_count
    }

    pub fn faces_count(&self) -> usize {
        self.topology.faces_count
    }

    pub fn face_vertices_maximum_count(&self) -> usize {
        self.topology.face_vertices_maximum_count
    }

    pub fn extent(&self) -> BBox {
        self.extent
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    // === Coordinate reference system ===

    /// Coordinate reference string; empty until set.
    pub fn crs(&self) -> &str {
        &self.crs
    }

    /// Stores a trimmed copy of `crs`.
    pub fn set_source_crs(&mut self, crs: &str) {
        self.crs = crs.trim().to_string();
    }

    /// Stores a WKT definition; same as [`Mesh::set_source_crs`].
    pub fn set_source_crs_from_wkt(&mut self, wkt: &str) {
        self.set_source_crs(wkt);
    }

    /// Stores `EPSG:<code>`.
    pub fn set_source_crs_from_epsg(&mut self, code: i32) {
        self.set_source_crs(&format!("EPSG:{code}"));
    }

    // === Geometry ===

    /// Attaches the provider of vertex and face cursors.
    ///
    /// The provider must yield exactly as many vertices and faces as the
    /// mesh was created with.
    pub fn set_geometry(&mut self, geometry: Box<dyn MeshGeometry>) -> Result<()> {
        if geometry.vertices_count() != self.topology.vertices_count {
            return Err(MdalError::SizeMismatch {
                expected: self.topology.vertices_count,
                actual: geometry.vertices_count(),
            });
        }
        if geometry.faces_count() != self.topology.faces_count {
            return Err(MdalError::SizeMismatch {
                expected: self.topology.faces_count,
                actual: geometry.faces_count(),
            });
        }
        self.geometry = Some(geometry);
        Ok(())
    }

    /// Returns whether a geometry provider is attached.
    pub fn has_geometry(&self) -> bool {
        self.geometry.is_some()
    }

    /// Returns a vertex cursor, if a geometry provider is attached.
    pub fn read_vertices(&self) -> Option<Box<dyn MeshVertexIterator + '_>> {
        self.geometry.as_ref().map(|geometry| geometry.read_vertices())
    }

    /// Returns a face cursor, if a geometry provider is attached.
    pub fn read_faces(&self) -> Option<Box<dyn MeshFaceIterator + '_>> {
        self.geometry.as_ref().map(|geometry| geometry.read_faces())
    }

    // === Dataset groups ===

    /// Appends a group created for this mesh.
    pub fn add_dataset_group(&mut self, group: DatasetGroup) -> Result<&mut DatasetGroup> {
        if group.mesh_id() != self.id {
            log::warn!(
                "rejected dataset group '{}' created for another mesh than '{}'",
                group.name(),
                self.uri
            );
            return Err(MdalError::ForeignGroup(group.name().to_string()));
        }
        log::debug!("attaching dataset group '{}' to mesh '{}'", group.name(), self.uri);
        self.dataset_groups.push(group);
        let index = self.dataset_groups.len() - 1;
        Ok(&mut self.dataset_groups[index])
    }

    /// Returns the first group named `name`.
    pub fn group(&self, name: &str) -> Option<GroupRef<'_>> {
        self.dataset_groups
            .iter()
            .find(|group| group.name() == name)
            .map(|group| GroupRef::new(self, group))
    }

    /// Returns the first group named `name` for modification.
    pub fn group_mut(&mut self, name: &str) -> Option<&mut DatasetGroup> {
        self.dataset_groups
            .iter_mut()
            .find(|group| group.name() == name)
    }

    pub fn dataset_group(&self, index: usize) -> Option<GroupRef<'_>> {
        self.dataset_groups
            .get(index)
            .map(|group| GroupRef::new(self, group))
    }

    pub fn dataset_group_mut(&mut self, index: usize) -> Option<&mut DatasetGroup> {
        self.dataset_groups.get_mut(index)
    }

    /// Returns the groups in insertion order.
    pub fn dataset_groups(&self) -> impl Iterator<Item = GroupRef<'_>> {
        self.dataset_groups
            .iter()
            .map(move |group| GroupRef::new(self, group))
    }

    pub fn dataset_groups_count(&self) -> usize {
        self.dataset_groups.len()
    }
}
