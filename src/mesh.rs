//! Mesh: owned vertex, element and surface collections.
//!
//! The mesh is the single owner of every entity. Elements and surfaces
//! refer to vertices by [`VertexId`], and all cross-references are resolved
//! through an id index rather than by storage position, because file ids
//! may skip numbers, start anywhere, or be listed out of order.
//!
//! # Invariants
//!
//! - Collections keep insertion order; no accessor reorders them.
//! - The id index maps each vertex id to the position of its **last**
//!   occurrence, so duplicate ids resolve the way a last-match linear scan
//!   would.
//! - Every vertex id referenced by a stored element or surface resolves.
//!
//! These are checked by [`DebugInvariants::validate_invariants`].

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshError;
use crate::topology::cell::{CellRecord, Element, Surface};
use crate::topology::id::VertexId;
use crate::topology::vertex::Vertex;
use hashbrown::HashMap;

/// A loaded mesh.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    elements: Vec<Element>,
    surfaces: Vec<Surface>,
    /// Vertex id -> position in `vertices` (last occurrence wins).
    vertex_index: HashMap<VertexId, usize>,
}

fn at<'a, T>(items: &'a [T], collection: &'static str, index: usize) -> Result<&'a T, MeshError> {
    items.get(index).ok_or(MeshError::OutOfRange {
        collection,
        index,
        len: items.len(),
    })
}

fn slot<'a, T>(
    items: &'a mut [T],
    collection: &'static str,
    index: usize,
) -> Result<&'a mut T, MeshError> {
    let len = items.len();
    items.get_mut(index).ok_or(MeshError::OutOfRange {
        collection,
        index,
        len,
    })
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// True when the mesh holds no entities of any kind.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.elements.is_empty() && self.surfaces.is_empty()
    }

    /// Vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Vertex at storage position `index`.
    ///
    /// # Errors
    /// `OutOfRange` if `index >= vertex_count()`.
    pub fn vertex_at(&self, index: usize) -> Result<&Vertex, MeshError> {
        at(&self.vertices, "vertex", index)
    }

    /// Element at storage position `index`.
    pub fn element_at(&self, index: usize) -> Result<&Element, MeshError> {
        at(&self.elements, "element", index)
    }

    /// Surface at storage position `index`.
    pub fn surface_at(&self, index: usize) -> Result<&Surface, MeshError> {
        at(&self.surfaces, "surface", index)
    }

    /// Appends a vertex and returns its position.
    ///
    /// A repeated id shadows the earlier vertex for id lookup; the earlier
    /// vertex stays in storage at its original position.
    pub fn push_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertex_index.insert(vertex.id(), index);
        self.vertices.push(vertex);
        index
    }

    /// Appends an element after checking that all its vertex ids resolve.
    ///
    /// # Errors
    /// `DanglingReference` naming the first unresolved vertex id.
    pub fn push_element(&mut self, element: Element) -> Result<usize, MeshError> {
        self.check_references(&element)?;
        self.elements.push(element);
        Ok(self.elements.len() - 1)
    }

    /// Appends a surface after checking that all its vertex ids resolve.
    pub fn push_surface(&mut self, surface: Surface) -> Result<usize, MeshError> {
        self.check_references(&surface)?;
        self.surfaces.push(surface);
        Ok(self.surfaces.len() - 1)
    }

    /// Replaces the vertex at `index`, returning the old one.
    ///
    /// When the id changes, the replacement is refused if it would leave an
    /// element or surface pointing at an id no other vertex carries.
    ///
    /// # Errors
    /// `OutOfRange` for a bad index, `DanglingReference` for an orphaning
    /// replacement. The mesh is unchanged on error.
    pub fn set_vertex(&mut self, index: usize, vertex: Vertex) -> Result<Vertex, MeshError> {
        let old_id = self.vertex_at(index)?.id();
        if old_id != vertex.id() {
            let still_present = self
                .vertices
                .iter()
                .enumerate()
                .any(|(i, v)| i != index && v.id() == old_id);
            if !still_present {
                self.ensure_unreferenced(old_id)?;
            }
        }
        let old = std::mem::replace(slot(&mut self.vertices, "vertex", index)?, vertex);
        if old.id() != vertex.id() {
            self.rebuild_vertex_index();
        }
        Ok(old)
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    /// `OutOfRange` for a bad index, `DanglingReference` if the new element
    /// cites an unknown vertex id.
    pub fn set_element(&mut self, index: usize, element: Element) -> Result<Element, MeshError> {
        at(&self.elements, "element", index)?;
        self.check_references(&element)?;
        Ok(std::mem::replace(
            slot(&mut self.elements, "element", index)?,
            element,
        ))
    }

    /// Replaces the surface at `index`, returning the old one.
    pub fn set_surface(&mut self, index: usize, surface: Surface) -> Result<Surface, MeshError> {
        at(&self.surfaces, "surface", index)?;
        self.check_references(&surface)?;
        Ok(std::mem::replace(
            slot(&mut self.surfaces, "surface", index)?,
            surface,
        ))
    }

    /// Looks up a vertex by id. With duplicate ids the last one inserted wins.
    #[inline]
    pub fn find_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_index_of(id).map(|i| &self.vertices[i])
    }

    /// Storage position of the vertex with `id`, if any.
    #[inline]
    pub fn vertex_index_of(&self, id: VertexId) -> Option<usize> {
        self.vertex_index.get(&id).copied()
    }

    #[inline]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex_index.contains_key(&id)
    }

    /// Resolves a record's vertex ids to vertices, in record order.
    ///
    /// # Errors
    /// `DanglingReference` naming the first id with no vertex.
    pub fn resolve<C: CellRecord>(&self, record: &C) -> Result<Vec<&Vertex>, MeshError> {
        record
            .vertex_ids()
            .iter()
            .map(|&vid| {
                self.find_vertex(vid).ok_or(MeshError::DanglingReference {
                    vertex: vid,
                    kind: C::KIND,
                    owner: record.id(),
                })
            })
            .collect()
    }

    /// Vertices of the element at `index`, in connectivity order.
    pub fn element_vertices(&self, index: usize) -> Result<Vec<&Vertex>, MeshError> {
        self.resolve(self.element_at(index)?)
    }

    /// Vertices of the surface at `index`, in connectivity order.
    pub fn surface_vertices(&self, index: usize) -> Result<Vec<&Vertex>, MeshError> {
        self.resolve(self.surface_at(index)?)
    }

    fn check_references<C: CellRecord>(&self, record: &C) -> Result<(), MeshError> {
        match record
            .vertex_ids()
            .iter()
            .find(|vid| !self.contains_vertex(**vid))
        {
            Some(&vertex) => Err(MeshError::DanglingReference {
                vertex,
                kind: C::KIND,
                owner: record.id(),
            }),
            None => Ok(()),
        }
    }

    fn ensure_unreferenced(&self, id: VertexId) -> Result<(), MeshError> {
        fn first_user<C: CellRecord>(records: &[C], id: VertexId) -> Option<&C> {
            records.iter().find(|r| r.vertex_ids().contains(&id))
        }
        if let Some(e) = first_user(&self.elements, id) {
            return Err(MeshError::DanglingReference {
                vertex: id,
                kind: Element::KIND,
                owner: e.id(),
            });
        }
        if let Some(s) = first_user(&self.surfaces, id) {
            return Err(MeshError::DanglingReference {
                vertex: id,
                kind: Surface::KIND,
                owner: s.id(),
            });
        }
        Ok(())
    }

    fn rebuild_vertex_index(&mut self) {
        self.vertex_index.clear();
        for (i, v) in self.vertices.iter().enumerate() {
            self.vertex_index.insert(v.id(), i);
        }
    }
}

impl DebugInvariants for Mesh {
    fn validate_invariants(&self) -> Result<(), MeshError> {
        let mut expected: HashMap<VertexId, usize> = HashMap::with_capacity(self.vertices.len());
        for (i, v) in self.vertices.iter().enumerate() {
            expected.insert(v.id(), i);
        }
        ensure(expected == self.vertex_index, || {
            format!(
                "vertex index out of sync: {} ids indexed, {} distinct ids stored",
                self.vertex_index.len(),
                expected.len()
            )
        })?;

        fn check_records<C: CellRecord>(mesh: &Mesh, records: &[C]) -> Result<(), MeshError> {
            for r in records {
                ensure(r.vertex_ids().len() == r.cell_type().node_count(), || {
                    format!(
                        "{} {} has {} vertex ids for a {}",
                        C::KIND,
                        r.id(),
                        r.vertex_ids().len(),
                        r.cell_type()
                    )
                })?;
                mesh.check_references(r)?;
            }
            Ok(())
        }
        check_records(self, &self.elements)?;
        check_records(self, &self.surfaces)
    }
}
