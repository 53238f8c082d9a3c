//! Where dataset values live on the mesh, and which kinds of values can be read.

use serde::{Deserialize, Serialize};

use crate::mesh::MeshTopology;

/// Mesh element a dataset group's values are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataLocation {
    /// Unknown or unsupported location.
    Invalid,
    /// One value per 2D vertex.
    #[default]
    OnVertices,
    /// One value per 2D face.
    OnFaces,
    /// One value per 3D volume stacked over the 2D faces.
    OnVolumes,
    /// One value per 1D edge.
    OnEdges,
}

impl DataLocation {
    /// Returns true for volumetric (stacked 3D) data.
    #[must_use]
    pub fn is_volumetric(self) -> bool {
        self == DataLocation::OnVolumes
    }

    /// Number of values a dataset at this location holds.
    ///
    /// Vertices and faces are counted by the mesh topology, volumes by the
    /// dataset; any other location holds nothing.
    #[must_use]
    pub fn values_count(self, topology: MeshTopology, volumes_count: usize) -> usize {
        match self {
            DataLocation::OnVertices => topology.vertices_count,
            DataLocation::OnFaces => topology.faces_count,
            DataLocation::OnVolumes => volumes_count,
            DataLocation::Invalid | DataLocation::OnEdges => 0,
        }
    }
}

/// Kind of values requested from a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// One `f64` per element of a scalar 2D group.
    ScalarDouble,
    /// Two `f64` (x, y) per element of a vector 2D group.
    Vector2dDouble,
    /// One `i32` active flag per face.
    ActiveInteger,
    /// Number of vertical levels per face.
    VerticalLevelCountInteger,
    /// Level extrusions; faces + volumes `f64` values in total.
    VerticalLevelDouble,
    /// Index of the first volume above each face.
    FaceIndexForVolumeIndexInteger,
    /// One `f64` per volume of a scalar 3D group.
    ScalarVolumesDouble,
    /// Two `f64` (x, y) per volume of a vector 3D group.
    Vector2dVolumesDouble,
}

impl DataType {
    /// Returns true if values of this type are written into an integer buffer.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            DataType::ActiveInteger
                | DataType::VerticalLevelCountInteger
                | DataType::FaceIndexForVolumeIndexInteger
        )
    }

    /// Number of buffer slots each element occupies.
    #[must_use]
    pub fn components(self) -> usize {
        match self {
            DataType::Vector2dDouble | DataType::Vector2dVolumesDouble => 2,
            _ => 1,
        }
    }

    /// Returns true if the type is only meaningful for volumetric groups.
    #[must_use]
    pub fn is_volumetric(self) -> bool {
        !matches!(
            self,
            DataType::ScalarDouble | DataType::Vector2dDouble | DataType::ActiveInteger
        )
    }
}
