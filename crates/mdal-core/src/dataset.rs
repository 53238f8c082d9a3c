//! Dataset trait and the placeholder 2D/3D variants.
//!
//! A [`Dataset`] holds one time step of values for a
//! [`DatasetGroup`](crate::DatasetGroup). The number of values is never stored
//! on the dataset: it is derived from the group's data location and the
//! mesh topology (see [`DatasetGroup::values_count`](crate::DatasetGroup::values_count)).
//!
//! # Value access
//!
//! Every accessor takes the index of the first element and an output buffer.
//! The requested element count is the buffer length, or half of it for the
//! vector accessors, which write `(x, y)` pairs. Accessors return the number
//! of elements written, which is never more than requested and is `0` when
//! `index_start` is past the available data. A short result means "no more
//! data", not an error.
//!
//! The default implementations return `0`. Concrete datasets override the
//! accessors they can serve.

use std::any::Any;

use crate::group::DatasetGroup;
use crate::handle::GroupId;
use crate::location::DataLocation;
use crate::statistics::Statistics;

/// Which family of accessors a dataset serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Values on 2D vertices or faces, optionally stacked into volumes.
    TwoD,
    /// Values on 3D volumes.
    ThreeD,
}

/// State shared by every dataset implementation.
#[derive(Debug, Clone)]
pub struct DatasetState {
    group_id: GroupId,
    data_location: DataLocation,
    is_scalar: bool,
    time: f64,
    statistics: Statistics,
    is_valid: bool,
    supports_active_flag: bool,
    volumes_count: usize,
}

impl DatasetState {
    /// Creates the state for a dataset that will belong to `group`.
    ///
    /// The dataset starts invalid, at time `0.0`, with no volumes. The
    /// group's current location and scalar flag are recorded; the group only
    /// accepts the dataset while they still match.
    pub fn new(group: &DatasetGroup) -> Self {
        Self {
            group_id: group.id(),
            data_location: group.data_location(),
            is_scalar: group.is_scalar(),
            time: 0.0,
            statistics: Statistics::default(),
            is_valid: false,
            supports_active_flag: false,
            volumes_count: 0,
        }
    }

    /// Id of the group this dataset was created for.
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Data location of the group when this dataset was shaped.
    pub fn data_location(&self) -> DataLocation {
        self.data_location
    }

    /// Scalar flag of the group when this dataset was shaped.
    pub fn is_scalar(&self) -> bool {
        self.is_scalar
    }
}

/// Buffer a typed data request writes into.
#[derive(Debug)]
pub enum DataBuffer<'a> {
    /// Floating point values.
    Double(&'a mut [f64]),
    /// Integer flags, counts and indices.
    Integer(&'a mut [i32]),
}

impl DataBuffer<'_> {
    /// Number of buffer slots.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            DataBuffer::Double(values) => values.len(),
            DataBuffer::Integer(values) => values.len(),
        }
    }

    /// Returns true if the buffer has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One time step of values for a dataset group.
pub trait Dataset: Any {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Shared dataset state.
    fn state(&self) -> &DatasetState;

    /// Mutable shared dataset state.
    fn state_mut(&mut self) -> &mut DatasetState;

    /// Which accessor family this dataset serves.
    fn kind(&self) -> DatasetKind;

    /// Id of the group this dataset was created for.
    fn group_id(&self) -> GroupId {
        self.state().group_id
    }

    /// Time of this step, in the units of the group's reference time.
    fn time(&self) -> f64 {
        self.state().time
    }

    fn set_time(&mut self, time: f64) {
        self.state_mut().time = time;
    }

    /// Returns whether the dataset has been populated and marked valid.
    fn is_valid(&self) -> bool {
        self.state().is_valid
    }

    fn set_is_valid(&mut self, is_valid: bool) {
        self.state_mut().is_valid = is_valid;
    }

    /// Cached statistics; NaN bounds until set.
    fn statistics(&self) -> Statistics {
        self.state().statistics
    }

    fn set_statistics(&mut self, statistics: Statistics) {
        self.state_mut().statistics = statistics;
    }

    /// Returns whether per-face active flags can be read.
    fn supports_active_flag(&self) -> bool {
        self.state().supports_active_flag
    }

    fn set_supports_active_flag(&mut self, supports: bool) {
        self.state_mut().supports_active_flag = supports;
    }

    /// Number of 3D volumes; only meaningful for volumetric groups.
    fn volumes_count(&self) -> usize {
        self.state().volumes_count
    }

    fn set_volumes_count(&mut self, volumes_count: usize) {
        self.state_mut().volumes_count = volumes_count;
    }

    /// Reads scalar values on vertices or faces.
    fn scalar_data(&self, _index_start: usize, _buffer: &mut [f64]) -> usize {
        0
    }

    /// Reads `(x, y)` vector values on vertices or faces.
    fn vector_data(&self, _index_start: usize, _buffer: &mut [f64]) -> usize {
        0
    }

    /// Reads per-face active flags (`1` active, `0` inactive).
    fn active_data(&self, _index_start: usize, _buffer: &mut [i32]) -> usize {
        0
    }

    /// Reads the number of vertical levels of each face.
    fn vertical_level_count_data(&self, _index_start: usize, _buffer: &mut [i32]) -> usize {
        0
    }

    /// Reads vertical level extrusions.
    fn vertical_level_data(&self, _index_start: usize, _buffer: &mut [f64]) -> usize {
        0
    }

    /// Reads, per face, the index of its first volume.
    fn face_to_volume_data(&self, _index_start: usize, _buffer: &mut [i32]) -> usize {
        0
    }

    /// Reads scalar values on volumes.
    fn scalar_volumes_data(&self, _index_start: usize, _buffer: &mut [f64]) -> usize {
        0
    }

    /// Reads `(x, y)` vector values on volumes.
    fn vector_volumes_data(&self, _index_start: usize, _buffer: &mut [f64]) -> usize {
        0
    }

    /// Reads per-volume active flags.
    fn active_volumes_data(&self, _index_start: usize, _buffer: &mut [i32]) -> usize {
        0
    }
}

/// Placeholder 2D dataset with no values.
///
/// Carries the shared state only; every accessor reports zero elements.
#[derive(Debug, Clone)]
pub struct Dataset2D {
    state: DatasetState,
}

impl Dataset2D {
    /// Creates an empty dataset for `group`.
    pub fn new(group: &DatasetGroup) -> Self {
        Self {
            state: DatasetState::new(group),
        }
    }
}

impl Dataset for Dataset2D {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn state(&self) -> &DatasetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DatasetState {
        &mut self.state
    }

    fn kind(&self) -> DatasetKind {
        DatasetKind::TwoD
    }
}

/// Placeholder 3D dataset with no values.
#[derive(Debug, Clone)]
pub struct Dataset3D {
    state: DatasetState,
}

impl Dataset3D {
    /// Creates an empty volumetric dataset for `group`.
    pub fn new(group: &DatasetGroup) -> Self {
        Self {
            state: DatasetState::new(group),
        }
    }
}

impl Dataset for Dataset3D {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn state(&self) -> &DatasetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DatasetState {
        &mut self.state
    }

    fn kind(&self) -> DatasetKind {
        DatasetKind::ThreeD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extent::BBox;
    use crate::mesh::Mesh;

    fn test_group() -> DatasetGroup {
        let mesh = Mesh::new("test", 100, 40, 4, BBox::default(), "mesh.2dm");
        DatasetGroup::new("test", &mesh, "mesh.2dm")
    }

    #[test]
    fn test_dataset_defaults() {
        let group = test_group();
        let dataset = Dataset2D::new(&group);
        assert!(!dataset.is_valid());
        assert_eq!(dataset.time(), 0.0);
        assert_eq!(dataset.volumes_count(), 0);
        assert!(dataset.statistics().is_unset());
        assert!(!dataset.supports_active_flag());
        assert_eq!(dataset.group_id(), group.id());
        assert_eq!(dataset.kind(), DatasetKind::TwoD);
    }

    #[test]
    fn test_plain_fields() {
        let group = test_group();
        let mut dataset = Dataset3D::new(&group);
        dataset.set_time(3.5);
        dataset.set_is_valid(true);
        dataset.set_statistics(Statistics::new(1.0, 2.0));
        dataset.set_volumes_count(17);
        assert_eq!(dataset.time(), 3.5);
        assert!(dataset.is_valid());
        assert_eq!(dataset.statistics(), Statistics::new(1.0, 2.0));
        assert_eq!(dataset.volumes_count(), 17);
        assert_eq!(dataset.kind(), DatasetKind::ThreeD);
    }

    #[test]
    fn test_placeholder_accessors_return_nothing() {
        let group = test_group();
        let d2 = Dataset2D::new(&group);
        let d3 = Dataset3D::new(&group);
        let mut doubles = [0.0; 8];
        let mut ints = [0; 8];
        for dataset in [&d2 as &dyn Dataset, &d3] {
            assert_eq!(dataset.scalar_data(0, &mut doubles), 0);
            assert_eq!(dataset.vector_data(0, &mut doubles), 0);
            assert_eq!(dataset.active_data(0, &mut ints), 0);
            assert_eq!(dataset.vertical_level_count_data(0, &mut ints), 0);
            assert_eq!(dataset.vertical_level_data(0, &mut doubles), 0);
            assert_eq!(dataset.face_to_volume_data(0, &mut ints), 0);
            assert_eq!(dataset.scalar_volumes_data(0, &mut doubles), 0);
            assert_eq!(dataset.vector_volumes_data(0, &mut doubles), 0);
            assert_eq!(dataset.active_volumes_data(0, &mut ints), 0);
        }
        assert!(doubles.iter().all(|&v| v == 0.0));
        assert!(ints.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_downcast() {
        let group = test_group();
        let dataset: Box<dyn Dataset> = Box::new(Dataset2D::new(&group));
        assert!(dataset.as_any().downcast_ref::<Dataset2D>().is_some());
        assert!(dataset.as_any().downcast_ref::<Dataset3D>().is_none());
    }
}
