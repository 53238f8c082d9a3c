//! Value-holding dataset on 2D vertices or faces.

use std::any::Any;

use mdal_core::{Dataset, DatasetGroup, DatasetKind, DatasetState};

use crate::buffer::{copy_pairs, copy_values};

/// A 2D dataset storing its values in memory.
///
/// Storage is sized when the dataset is created, from the group's data
/// location and scalar flag: one value per element for scalar groups, an
/// interleaved `(x, y)` pair per element for vector groups. Active flags, when
/// requested, hold one entry per mesh face and start out active.
#[derive(Debug, Clone)]
pub struct MemoryDataset2D {
    state: DatasetState,
    is_scalar: bool,
    values: Vec<f64>,
    active: Vec<i32>,
}

impl MemoryDataset2D {
    /// Creates a zero-filled dataset shaped for `group`.
    pub fn new(group: &DatasetGroup, has_active_flag: bool) -> Self {
        let topology = group.mesh_topology();
        let values_count = group.data_location().values_count(topology, 0);
        let components = if group.is_scalar() { 1 } else { 2 };

        let active = if has_active_flag {
            vec![1; topology.faces_count]
        } else {
            Vec::new()
        };
        let mut dataset = Self {
            state: DatasetState::new(group),
            is_scalar: group.is_scalar(),
            values: vec![0.0; values_count * components],
            active,
        };
        dataset.set_supports_active_flag(has_active_flag);
        dataset
    }

    /// Returns whether values are scalars.
    pub fn is_scalar(&self) -> bool {
        self.is_scalar
    }

    /// Returns the raw values; vectors are interleaved `x, y` pairs.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the raw values for in-place population.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Scalar value of element `index`.
    pub fn scalar_value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Sets the scalar value of element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_scalar_value(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    /// Vector value of element `index`.
    pub fn vector_value(&self, index: usize) -> (f64, f64) {
        (self.values[2 * index], self.values[2 * index + 1])
    }

    /// Sets the vector value of element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_vector_value(&mut self, index: usize, x: f64, y: f64) {
        self.values[2 * index] = x;
        self.values[2 * index + 1] = y;
    }

    /// Returns whether face `index` is active; faces without flags are active.
    pub fn is_active(&self, face_index: usize) -> bool {
        self.active.get(face_index).map_or(true, |&flag| flag != 0)
    }

    /// Marks face `face_index` active or inactive.
    ///
    /// # Panics
    ///
    /// Panics if the dataset has no active flags or the index is out of range.
    pub fn set_active(&mut self, face_index: usize, active: bool) {
        self.active[face_index] = i32::from(active);
    }
}

impl Dataset for MemoryDataset2D {
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

    fn scalar_data(&self, index_start: usize, buffer: &mut [f64]) -> usize {
        if !self.is_scalar {
            return 0;
        }
        copy_values(&self.values, index_start, buffer)
    }

    fn vector_data(&self, index_start: usize, buffer: &mut [f64]) -> usize {
        if self.is_scalar {
            return 0;
        }
        copy_pairs(&self.values, index_start, buffer)
    }

    fn active_data(&self, index_start: usize, buffer: &mut [i32]) -> usize {
        copy_values(&self.active, index_start, buffer)
    }
}
