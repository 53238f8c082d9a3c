//! Capability traits for reading mesh geometry in batches.
//!
//! The core never walks geometry itself. Geometry providers implement these
//! traits and hand them to a [`Mesh`](crate::Mesh) through
//! [`Mesh::set_geometry`](crate::Mesh::set_geometry).

/// Cursor over mesh vertices.
pub trait MeshVertexIterator {
    /// Writes the next vertices as `x, y, z` triples.
    ///
    /// At most `coordinates.len() / 3` vertices are written. Returns the
    /// number of vertices written; `0` once all vertices were read.
    fn next_vertices(&mut self, coordinates: &mut [f64]) -> usize;
}

/// Cursor over mesh faces.
pub trait MeshFaceIterator {
    /// Writes the next faces.
    ///
    /// Vertex indices of consecutive faces are packed into `vertex_indices`;
    /// `face_offsets[i]` is the position in `vertex_indices` just past the
    /// last vertex of face `i` of this batch. A face is only written if all
    /// of its vertices fit. Returns the number of faces written; `0` once all
    /// faces were read.
    ///
    /// `vertex_indices` must hold at least
    /// [`Mesh::face_vertices_maximum_count`](crate::Mesh::face_vertices_maximum_count)
    /// entries. With a smaller buffer a face may not fit, the call returns `0`
    /// and the cursor stays on that face.
    fn next_faces(&mut self, face_offsets: &mut [i32], vertex_indices: &mut [i32]) -> usize;
}

/// Source of geometry cursors for one mesh.
pub trait MeshGeometry {
    /// Number of vertices the vertex cursor yields.
    fn vertices_count(&self) -> usize;

    /// Number of faces the face cursor yields.
    fn faces_count(&self) -> usize;

    /// Returns a cursor positioned at the first vertex.
    fn read_vertices(&self) -> Box<dyn MeshVertexIterator + '_>;

    /// Returns a cursor positioned at the first face.
    fn read_faces(&self) -> Box<dyn MeshFaceIterator + '_>;
}
