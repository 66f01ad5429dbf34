//! Mesh vertices.

use crate::topology::id::VertexId;

/// A point in 3D space with the id it was given in the mesh file.
///
/// Fields are private: a vertex never changes after construction. To move
/// a vertex, replace it in the owning [`Mesh`](crate::mesh::Mesh).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vertex {
    id: VertexId,
    coordinates: [f64; 3],
}

impl Vertex {
    /// Creates a vertex with the given id and coordinates.
    #[inline]
    pub fn new(id: u64, coordinates: [f64; 3]) -> Self {
        Self {
            id: VertexId::new(id),
            coordinates,
        }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The `(x, y, z)` coordinates.
    #[inline]
    pub fn coordinates(&self) -> [f64; 3] {
        self.coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let v = Vertex::new(4, [1.0, -2.5, 3.0]);
        assert_eq!(v.id(), VertexId::new(4));
        assert_eq!(v.coordinates(), [1.0, -2.5, 3.0]);
    }
}
