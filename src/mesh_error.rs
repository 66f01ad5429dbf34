//! MeshError: unified error type for readmesh public APIs
//!
//! Every load failure aborts the load and surfaces here with enough context
//! (line number, raw text, offending id) to locate the problem in the input
//! file. Accessor failures use the same type but only fail the single call.

use crate::topology::cell::CellKind;
use crate::topology::cell_type::CellType;
use crate::topology::id::{CellId, VertexId};
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for mesh loading and mesh access.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The input path could not be opened.
    #[error("cannot open mesh file {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading an already opened input failed (including invalid UTF-8).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A mandatory section marker never appeared.
    #[error("section `{keyword}` not found")]
    SectionNotFound { keyword: String },
    /// A field could not be parsed, or a section ended early.
    #[error("line {line}: {reason} (`{text}`)")]
    ParseError {
        line: usize,
        text: String,
        reason: String,
    },
    /// A record lists the wrong number of vertex ids for its type.
    #[error("line {line}: {cell_type} {id} lists {found} vertex ids, expected {expected}")]
    MalformedRecord {
        line: usize,
        id: CellId,
        cell_type: CellType,
        expected: usize,
        found: usize,
    },
    /// A record carries a type tag with no known shape.
    #[error("line {line}: unsupported cell type tag {tag}")]
    UnsupportedCellType { line: usize, tag: u32 },
    /// An element/surface references a vertex id absent from the mesh.
    #[error("{kind} {owner} references missing vertex {vertex}")]
    DanglingReference {
        vertex: VertexId,
        kind: CellKind,
        owner: CellId,
    },
    /// A vertex id appeared twice and duplicates are configured as errors.
    #[error("line {line}: duplicate vertex id {id}")]
    DuplicateVertexId { id: VertexId, line: usize },
    /// A record built in code lists the wrong number of vertex ids.
    #[error("{cell_type} {id} lists {found} vertex ids, expected {expected}")]
    ConnectivityMismatch {
        id: CellId,
        cell_type: CellType,
        expected: usize,
        found: usize,
    },
    /// Index-based access past the end of a collection.
    #[error("{collection} index {index} out of range (len {len})")]
    OutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },
    /// Internal consistency check failed.
    #[error("mesh invariant violated: {0}")]
    InvariantViolation(String),
}

impl MeshError {
    /// Builds a `ParseError` for a raw input line.
    pub(crate) fn parse(line: usize, text: &str, reason: impl Into<String>) -> Self {
        MeshError::ParseError {
            line,
            text: text.trim().to_string(),
            reason: reason.into(),
        }
    }
}
