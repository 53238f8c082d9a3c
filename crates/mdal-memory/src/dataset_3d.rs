//! Value-holding dataset on volumes stacked over 2D faces.
//!
//! Each face carries a column of volumes. The column of face `f` has
//! `level_counts[f]` volumes bounded by `level_counts[f] + 1` level surfaces,
//! so the extrusion array holds `faces + volumes` entries. Volumes are
//! numbered column by column, and the face-to-volume index records where each
//! column starts.

use std::any::Any;

use mdal_core::{Dataset, DatasetGroup, DatasetKind, DatasetState, MdalError, Result};

use crate::buffer::{copy_as_i32, copy_pairs, copy_values};

/// A 3D dataset storing its values in memory.
#[derive(Debug, Clone)]
pub struct MemoryDataset3D {
    state: DatasetState,
    is_scalar: bool,
    level_counts: Vec<usize>,
    level_extrusions: Vec<f64>,
    face_to_volume: Vec<usize>,
    values: Vec<f64>,
}

impl MemoryDataset3D {
    /// Creates a zero-filled dataset for `group` from its vertical structure.
    ///
    /// `level_counts` needs one entry per mesh face and `level_extrusions`
    /// one entry per face plus one per volume.
    pub fn new(group: &DatasetGroup, level_counts: Vec<usize>, level_extrusions: Vec<f64>) -> Result<Self> {
        let faces_count = group.mesh_topology().faces_count;
        if level_counts.len() != faces_count {
            return Err(MdalError::SizeMismatch {
                expected: faces_count,
                actual: level_counts.len(),
            });
        }

        let face_to_volume: Vec<usize> = level_counts
            .iter()
            .scan(0, |next, &count| {
                let first = *next;
                *next += count;
                Some(first)
            })
            .collect();
        let volumes_count: usize = level_counts.iter().sum();

        if level_extrusions.len() != faces_count + volumes_count {
            return Err(MdalError::SizeMismatch {
                expected: faces_count + volumes_count,
                actual: level_extrusions.len(),
            });
        }

        let components = if group.is_scalar() { 1 } else { 2 };
        let mut dataset = Self {
            state: DatasetState::new(group),
            is_scalar: group.is_scalar(),
            level_counts,
            level_extrusions,
            face_to_volume,
            values: vec![0.0; volumes_count * components],
        };
        dataset.set_volumes_count(volumes_count);
        log::debug!("allocated 3D dataset with {volumes_count} volumes over {faces_count} faces");
        Ok(dataset)
    }

    /// Returns whether values are scalars.
    pub fn is_scalar(&self) -> bool {
        self.is_scalar
    }

    /// Number of volumes above each face.
    pub fn level_counts(&self) -> &[usize] {
        &self.level_counts
    }

    /// Index of the first volume above each face.
    pub fn face_to_volume(&self) -> &[usize] {
        &self.face_to_volume
    }

    /// Level surface elevations, column by column.
    pub fn level_extrusions(&self) -> &[f64] {
        &self.level_extrusions
    }

    /// Returns the raw values; vectors are interleaved `x, y` pairs.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the raw values for in-place population.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Sets the scalar value of volume `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_scalar_value(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    /// Sets the vector value of volume `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_vector_value(&mut self, index: usize, x: f64, y: f64) {
        self.values[2 * index] = x;
        self.values[2 * index + 1] = y;
    }
}

impl Dataset for MemoryDataset3D {
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

    fn vertical_level_count_data(&self, index_start: usize, buffer: &mut [i32]) -> usize {
        copy_as_i32(&self.level_counts, index_start, buffer)
    }

    fn vertical_level_data(&self, index_start: usize, buffer: &mut [f64]) -> usize {
        copy_values(&self.level_extrusions, index_start, buffer)
    }

    fn face_to_volume_data(&self, index_start: usize, buffer: &mut [i32]) -> usize {
        copy_as_i32(&self.face_to_volume, index_start, buffer)
    }

    fn scalar_volumes_data(&self, index_start: usize, buffer: &mut [f64]) -> usize {
        if !self.is_scalar {
            return 0;
        }
        copy_values(&self.values, index_start, buffer)
    }

    fn vector_volumes_data(&self, index_start: usize, buffer: &mut [f64]) -> usize {
        if self.is_scalar {
            return 0;
        }
        copy_pairs(&self.values, index_start, buffer)
    }
}
