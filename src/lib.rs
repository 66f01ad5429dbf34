#![cfg_attr(docsrs, feature(doc_cfg))]
//! # readmesh
//!
//! readmesh loads finite-element meshes from keyword-delimited ASCII files
//! into an owned, id-addressable model: vertices, volumetric elements and
//! boundary surfaces.
//!
//! ## Features
//! - Forward-only section scanner with line-accurate diagnostics
//! - Vertex, element and surface parsers for plain and Gmsh-tagged records
//! - Id-based cross-reference resolution (file ids need not match storage
//!   positions)
//! - Fail-fast loading: every error aborts the load, no partial meshes
//!
//! ## Usage
//! ```rust
//! # fn main() -> Result<(), readmesh::mesh_error::MeshError> {
//! use readmesh::io::MeshReader;
//! use readmesh::prelude::*;
//!
//! let text = "$Nodes\n3\n1 0 0 0\n2 1 0 0\n3 0 1 0\n$Elements\n1\n1 2 1 2 3\n";
//! let mesh = MeshReader::default().read_str(text)?;
//! assert_eq!(mesh.vertex_count(), 3);
//! let tri = mesh.element_at(0)?;
//! assert_eq!(tri.cell_type(), CellType::Triangle);
//! let corners = mesh.element_vertices(0)?;
//! assert_eq!(corners[1].coordinates(), [1.0, 0.0, 0.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//! Progress goes through the [`log`] facade (`debug` per section, `info` per
//! load, `warn` for duplicate vertex ids). Install any logger to see it.
//!
//! ## Invariant checks
//! Loaded meshes are validated in debug builds, and in release builds with
//! the `check-invariants` feature. See [`DebugInvariants`].

pub mod debug_invariants;
pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use io::{load, load_with_options};

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::io::{
        DuplicateVertexHandling, LoadOptions, MeshReader, RecordLayout, SectionKeywords, load,
        load_with_options,
    };
    pub use crate::mesh::Mesh;
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::{
        CellId, CellKind, CellRecord, CellType, Element, Surface, Vertex, VertexId,
    };
}
