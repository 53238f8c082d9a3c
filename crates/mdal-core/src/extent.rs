//! Spatial extent of a mesh.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned 2D bounding box of a mesh in its source coordinate system.
///
/// The model stores the extent handed over by the driver and never
/// recomputes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox {
    /// Lower-left corner.
    pub min: DVec2,
    /// Upper-right corner.
    pub max: DVec2,
}

impl BBox {
    /// Creates a bounding box from its x and y bounds.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min: DVec2::new(min_x, min_y),
            max: DVec2::new(max_x, max_y),
        }
    }

    /// Creates a bounding box from two corners.
    pub fn from_corners(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn min_x(&self) -> f64 {
        self.min.x
    }

    pub fn max_x(&self) -> f64 {
        self.max.x
    }

    pub fn min_y(&self) -> f64 {
        self.min.y
    }

    pub fn max_y(&self) -> f64 {
        self.max.y
    }
}
