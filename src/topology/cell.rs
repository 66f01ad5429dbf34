//! Element and surface records.
//!
//! Both record kinds share one shape: an id, a [`CellType`], the ordered
//! vertex ids making up the cell, and optional group tags. Elements are the
//! volume cells of the discretization; surfaces are boundary faces and
//! carry the tags used to attach boundary conditions.
//!
//! Records hold [`VertexId`] keys, never vertex references. They are
//! resolved through [`Mesh::resolve`](crate::mesh::Mesh::resolve).

use crate::mesh_error::MeshError;
use crate::topology::cell_type::CellType;
use crate::topology::id::{CellId, VertexId};
use std::fmt;

/// Which collection a record belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CellKind {
    Element,
    Surface,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Element => f.write_str("element"),
            CellKind::Surface => f.write_str("surface"),
        }
    }
}

/// Common read access to element and surface records.
pub trait CellRecord {
    /// Collection this record type lives in.
    const KIND: CellKind;

    fn id(&self) -> CellId;
    fn cell_type(&self) -> CellType;
    /// Vertex ids in the order the file listed them.
    fn vertex_ids(&self) -> &[VertexId];
    /// Group tags; empty when the file layout carries none.
    fn tags(&self) -> &[u64];
}

fn check_connectivity(
    id: CellId,
    cell_type: CellType,
    vertex_ids: &[VertexId],
) -> Result<(), MeshError> {
    let expected = cell_type.node_count();
    if vertex_ids.len() != expected {
        return Err(MeshError::ConnectivityMismatch {
            id,
            cell_type,
            expected,
            found: vertex_ids.len(),
        });
    }
    Ok(())
}

macro_rules! cell_record {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            id: CellId,
            cell_type: CellType,
            vertex_ids: Vec<VertexId>,
            tags: Vec<u64>,
        }

        impl $name {
            /// Builds a record, checking the id list against the shape.
            ///
            /// # Errors
            /// `ConnectivityMismatch` if `vertex_ids.len()` differs from
            /// `cell_type.node_count()`.
            pub fn new(
                id: u64,
                cell_type: CellType,
                vertex_ids: Vec<VertexId>,
            ) -> Result<Self, MeshError> {
                let id = CellId::new(id);
                check_connectivity(id, cell_type, &vertex_ids)?;
                Ok(Self {
                    id,
                    cell_type,
                    vertex_ids,
                    tags: Vec::new(),
                })
            }

            /// Attaches group tags (physical group first, as in Gmsh files).
            pub fn with_tags(mut self, tags: Vec<u64>) -> Self {
                self.tags = tags;
                self
            }

            /// First tag, conventionally the physical group.
            #[inline]
            pub fn physical_tag(&self) -> Option<u64> {
                self.tags.first().copied()
            }
        }

        impl CellRecord for $name {
            const KIND: CellKind = $kind;

            #[inline]
            fn id(&self) -> CellId {
                self.id
            }
            #[inline]
            fn cell_type(&self) -> CellType {
                self.cell_type
            }
            #[inline]
            fn vertex_ids(&self) -> &[VertexId] {
                &self.vertex_ids
            }
            #[inline]
            fn tags(&self) -> &[u64] {
                &self.tags
            }
        }
    };
}

cell_record! {
    /// A volumetric cell.
    Element, CellKind::Element
}

cell_record! {
    /// A boundary face.
    Surface, CellKind::Surface
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn element_keeps_vertex_order() {
        let e = Element::new(10, CellType::Tetrahedron, ids(&[4, 2, 3, 1])).unwrap();
        assert_eq!(e.id(), CellId::new(10));
        assert_eq!(e.vertex_ids(), ids(&[4, 2, 3, 1]).as_slice());
        assert!(e.tags().is_empty());
        assert_eq!(e.physical_tag(), None);
    }

    #[test]
    fn wrong_vertex_count_is_rejected() {
        let err = Surface::new(3, CellType::Triangle, ids(&[1, 2])).unwrap_err();
        assert!(
            matches!(
                err,
                MeshError::ConnectivityMismatch {
                    expected: 3,
                    found: 2,
                    ..
                }
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn tags_and_kind() {
        let s = Surface::new(1, CellType::Segment, ids(&[1, 2]))
            .unwrap()
            .with_tags(vec![7, 1]);
        assert_eq!(s.physical_tag(), Some(7));
        assert_eq!(Surface::KIND, CellKind::Surface);
        assert_eq!(Element::KIND.to_string(), "element");
    }
}
