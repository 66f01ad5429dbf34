//! Mesh entity types.
//!
//! - [`id`]: `VertexId` / `CellId` handles taken from the file
//! - [`vertex`]: immutable 3D points
//! - [`cell`]: element and surface records referencing vertices by id
//! - [`cell_type`]: supported cell shapes and their type tags

pub mod cell;
pub mod cell_type;
pub mod id;
pub mod vertex;

pub use cell::{CellKind, CellRecord, Element, Surface};
pub use cell_type::CellType;
pub use id::{CellId, VertexId};
pub use vertex::Vertex;
