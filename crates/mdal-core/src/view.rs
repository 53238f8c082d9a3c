//! Borrowed views that pair a child with its ancestors.
//!
//! Groups and datasets do not point back at their parents. A [`GroupRef`]
//! borrows a group together with its mesh, and a [`DatasetRef`] borrows a
//! dataset together with its group and mesh, so projections such as
//! [`DatasetRef::mesh`] or [`DatasetRef::values_count`] resolve through the
//! ownership chain. Views are only handed out by [`Mesh`], which guarantees the
//! pairing is real.

use std::ops::Deref;

use crate::dataset::{DataBuffer, Dataset};
use crate::error::{MdalError, Result};
use crate::group::DatasetGroup;
use crate::location::{DataLocation, DataType};
use crate::mesh::Mesh;

/// A dataset group together with the mesh that owns it.
#[derive(Clone, Copy)]
pub struct GroupRef<'a> {
    mesh: &'a Mesh,
    group: &'a DatasetGroup,
}

impl<'a> GroupRef<'a> {
    pub(crate) fn new(mesh: &'a Mesh, group: &'a DatasetGroup) -> Self {
        Self { mesh, group }
    }

    /// The mesh owning this group.
    pub fn mesh(&self) -> &'a Mesh {
        self.mesh
    }

    /// The group itself.
    pub fn group(&self) -> &'a DatasetGroup {
        self.group
    }

    pub fn dataset(&self, index: usize) -> Option<DatasetRef<'a>> {
        let group = *self;
        self.group
            .dataset(index)
            .map(|dataset| DatasetRef { group, dataset })
    }

    /// Returns the datasets in insertion order.
    pub fn datasets(&self) -> impl Iterator<Item = DatasetRef<'a>> + 'a {
        let group = *self;
        self.group
            .datasets()
            .map(move |dataset| DatasetRef { group, dataset })
    }
}

impl Deref for GroupRef<'_> {
    type Target = DatasetGroup;

    fn deref(&self) -> &DatasetGroup {
        self.group
    }
}

/// A dataset together with its group and mesh.
#[derive(Clone, Copy)]
pub struct DatasetRef<'a> {
    group: GroupRef<'a>,
    dataset: &'a dyn Dataset,
}

impl<'a> DatasetRef<'a> {
    /// The mesh owning the dataset's group.
    pub fn mesh(&self) -> &'a Mesh {
        self.group.mesh
    }

    /// The group owning this dataset.
    pub fn group(&self) -> GroupRef<'a> {
        self.group
    }

    /// The dataset itself.
    pub fn dataset(&self) -> &'a dyn Dataset {
        self.dataset
    }

    /// Driver name of the owning group.
    pub fn driver_name(&self) -> &'a str {
        self.group.group.driver_name()
    }

    /// Number of values, derived from the group location and mesh topology.
    pub fn values_count(&self) -> usize {
        self.group.group.values_count(self.dataset)
    }

    /// Reads values of `data_type` starting at element `index_start`.
    ///
    /// The request must match the group: scalar types need a scalar group,
    /// vector types a vector group, volumetric types a group on volumes, and
    /// the buffer must hold integers exactly when the type does. The count
    /// is clamped to the elements available from `index_start`; a start past
    /// the end reads nothing.
    pub fn data(&self, data_type: DataType, index_start: usize, buffer: DataBuffer<'_>) -> Result<usize> {
        let available = self.available_count(data_type)?;
        if buffer_is_integer(&buffer) != data_type.is_integer() {
            return Err(MdalError::IncompatibleDataset(format!(
                "{data_type:?} needs {} buffer",
                if data_type.is_integer() { "an integer" } else { "a double" }
            )));
        }
        if index_start >= available {
            return Ok(0);
        }

        let components = data_type.components();
        let count = (buffer.len() / components).min(available - index_start);
        let len = count * components;
        let dataset = self.dataset;

        let written = match buffer {
            DataBuffer::Double(values) => {
                let values = &mut values[..len];
                match data_type {
                    DataType::ScalarDouble => dataset.scalar_data(index_start, values),
                    DataType::Vector2dDouble => dataset.vector_data(index_start, values),
                    DataType::VerticalLevelDouble => dataset.vertical_level_data(index_start, values),
                    DataType::ScalarVolumesDouble => dataset.scalar_volumes_data(index_start, values),
                    DataType::Vector2dVolumesDouble => dataset.vector_volumes_data(index_start, values),
                    // integer types were rejected above for double buffers
                    DataType::ActiveInteger
                    | DataType::VerticalLevelCountInteger
                    | DataType::FaceIndexForVolumeIndexInteger => unreachable!(),
                }
            }
            DataBuffer::Integer(values) => {
                let values = &mut values[..len];
                match data_type {
                    DataType::ActiveInteger => dataset.active_data(index_start, values),
                    DataType::VerticalLevelCountInteger => {
                        dataset.vertical_level_count_data(index_start, values)
                    }
                    DataType::FaceIndexForVolumeIndexInteger => {
                        dataset.face_to_volume_data(index_start, values)
                    }
                    // double types were rejected above for integer buffers
                    DataType::ScalarDouble
                    | DataType::Vector2dDouble
                    | DataType::VerticalLevelDouble
                    | DataType::ScalarVolumesDouble
                    | DataType::Vector2dVolumesDouble => unreachable!(),
                }
            }
        };
        Ok(written.min(count))
    }

    /// Elements of `data_type` this dataset can serve, or why it cannot.
    fn available_count(&self, data_type: DataType) -> Result<usize> {
        let group = self.group.group;
        let mesh = self.group.mesh;
        let volumetric = group.data_location() == DataLocation::OnVolumes;

        let incompatible = |reason: &str| {
            Err(MdalError::IncompatibleDataset(format!(
                "{data_type:?} on group '{}': {reason}",
                group.name()
            )))
        };

        if data_type.is_volumetric() && !volumetric {
            return incompatible("group is not on volumes");
        }
        match data_type {
            DataType::ScalarDouble | DataType::Vector2dDouble if volumetric => {
                incompatible("group is on volumes")
            }
            DataType::ScalarDouble | DataType::ScalarVolumesDouble if !group.is_scalar() => {
                incompatible("group holds vectors")
            }
            DataType::Vector2dDouble | DataType::Vector2dVolumesDouble if group.is_scalar() => {
                incompatible("group holds scalars")
            }
            DataType::ActiveInteger if !self.dataset.supports_active_flag() => {
                incompatible("dataset has no active flags")
            }
            DataType::ScalarDouble | DataType::Vector2dDouble => Ok(self.values_count()),
            DataType::ActiveInteger
            | DataType::VerticalLevelCountInteger
            | DataType::FaceIndexForVolumeIndexInteger => Ok(mesh.faces_count()),
            DataType::VerticalLevelDouble => Ok(mesh.faces_count() + self.dataset.volumes_count()),
            DataType::ScalarVolumesDouble | DataType::Vector2dVolumesDouble => {
                Ok(self.dataset.volumes_count())
            }
        }
    }
}

fn buffer_is_integer(buffer: &DataBuffer<'_>) -> bool {
    matches!(buffer, DataBuffer::Integer(_))
}

impl<'a> Deref for DatasetRef<'a> {
    type Target = dyn Dataset;

    fn deref(&self) -> &Self::Target {
        self.dataset
    }
}
