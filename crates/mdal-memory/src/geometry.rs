//! Mesh geometry held in memory.
//!
//! # Example
//!
//! ```rust
//! use mdal_core::DVec3;
//! use mdal_memory::MemoryGeometry;
//!
//! let vertices = vec![
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(1.0, 1.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//! ];
//! let geometry = MemoryGeometry::new(vertices, vec![vec![0, 1, 2, 3]]);
//! let mesh = geometry.into_mesh("memory", "square").unwrap();
//! assert_eq!(mesh.faces_count(), 1);
//! ```

use glam::{DVec2, DVec3};
use mdal_core::{
    BBox, Mesh, MeshFaceIterator, MeshGeometry, MeshTopology, MeshVertexIterator, Result,
};

/// Vertices and polygonal faces of a 2D mesh.
///
/// Faces list vertex indices in order; faces may have different sizes.
#[derive(Debug, Clone, Default)]
pub struct MemoryGeometry {
    vertices: Vec<DVec3>,
    faces: Vec<Vec<usize>>,
}

impl MemoryGeometry {
    /// Creates geometry from vertex positions and face vertex indices.
    pub fn new(vertices: Vec<DVec3>, faces: Vec<Vec<usize>>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the faces.
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Largest number of vertices in a single face.
    pub fn face_vertices_maximum_count(&self) -> usize {
        self.faces.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Element counts of this geometry.
    pub fn topology(&self) -> MeshTopology {
        MeshTopology {
            vertices_count: self.vertices.len(),
            faces_count: self.faces.len(),
            face_vertices_maximum_count: self.face_vertices_maximum_count(),
        }
    }

    /// Planar bounding box of the vertices; zero-sized if there are none.
    pub fn extent(&self) -> BBox {
        if self.vertices.is_empty() {
            return BBox::default();
        }
        let mut min = DVec2::splat(f64::MAX);
        let mut max = DVec2::splat(f64::MIN);
        for vertex in &self.vertices {
            min = min.min(vertex.truncate());
            max = max.max(vertex.truncate());
        }
        BBox::from_corners(min, max)
    }

    /// Builds a mesh sized from this geometry and attaches it as provider.
    pub fn into_mesh(self, driver_name: impl Into<String>, uri: impl Into<String>) -> Result<Mesh> {
        let topology = self.topology();
        let mut mesh = Mesh::new(
            driver_name,
            topology.vertices_count,
            topology.faces_count,
            topology.face_vertices_maximum_count,
            self.extent(),
            uri,
        );
        log::debug!(
            "built in-memory mesh with {} vertices and {} faces",
            topology.vertices_count,
            topology.faces_count
        );
        mesh.set_geometry(Box::new(self))?;
        Ok(mesh)
    }
}

impl MeshGeometry for MemoryGeometry {
    fn vertices_count(&self) -> usize {
        self.vertices.len()
    }

    fn faces_count(&self) -> usize {
        self.faces.len()
    }

    fn read_vertices(&self) -> Box<dyn MeshVertexIterator + '_> {
        Box::new(MemoryVertexIterator::new(&self.vertices))
    }

    fn read_faces(&self) -> Box<dyn MeshFaceIterator + '_> {
        Box::new(MemoryFaceIterator::new(&self.faces))
    }
}

/// Batch cursor over in-memory vertices.
pub struct MemoryVertexIterator<'a> {
    vertices: &'a [DVec3],
    position: usize,
}

impl<'a> MemoryVertexIterator<'a> {
    pub fn new(vertices: &'a [DVec3]) -> Self {
        Self {
            vertices,
            position: 0,
        }
    }
}

impl MeshVertexIterator for MemoryVertexIterator<'_> {
    fn next_vertices(&mut self, coordinates: &mut [f64]) -> usize {
        let remaining = &self.vertices[self.position..];
        let count = remaining.len().min(coordinates.len() / 3);
        for (slot, vertex) in coordinates.chunks_exact_mut(3).zip(&remaining[..count]) {
            slot.copy_from_slice(&vertex.to_array());
        }
        self.position += count;
        count
    }
}

/// Batch cursor over in-memory faces.
///
/// Size `vertex_indices` for the largest face; see
/// [`MemoryGeometry::face_vertices_maximum_count`].
pub struct MemoryFaceIterator<'a> {
    faces: &'a [Vec<usize>],
    position: usize,
}

impl<'a> MemoryFaceIterator<'a> {
    pub fn new(faces: &'a [Vec<usize>]) -> Self {
        Self { faces, position: 0 }
    }
}

impl MeshFaceIterator for MemoryFaceIterator<'_> {
    fn next_faces(&mut self, face_offsets: &mut [i32], vertex_indices: &mut [i32]) -> usize {
        let mut written = 0;
        let mut used = 0;
        while written < face_offsets.len() && self.position < self.faces.len() {
            let face = &self.faces[self.position];
            if used + face.len() > vertex_indices.len() {
                break;
            }
            for (slot, &index) in vertex_indices[used..used + face.len()].iter_mut().zip(face) {
                *slot = index as i32;
            }
            used += face.len();
            face_offsets[written] = used as i32;
            written += 1;
            self.position += 1;
        }
        if written == 0 && !face_offsets.is_empty() && self.position < self.faces.len() {
            log::warn!(
                "face {} needs {} vertex slots, buffer holds {}",
                self.position,
                self.faces[self.position].len(),
                vertex_indices.len()
            );
        }
        written
    }
}
