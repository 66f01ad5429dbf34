//! Mesh file loading.
//!
//! # Supported format
//! A line-oriented ASCII file made of optional sections, each introduced by
//! an exact-match marker line:
//!
//! ```text
//! $Nodes
//! 3
//! 1 0.0 0.0 0.0
//! 2 1.0 0.0 0.0
//! 3 0.0 1.0 0.0
//! $Elements
//! 1
//! 1 2 1 2 3
//! ```
//!
//! - Vertex records are `id x y z`.
//! - Element and surface records are `id type v1 .. vk`, or
//!   `id type ntags t1 .. tn v1 .. vk` with [`RecordLayout::GmshTagged`].
//!   `type` uses Gmsh element numbering (see [`CellType::from_tag`]).
//! - Lines outside sections (format headers, end markers, comments) are
//!   ignored, and sections may appear in any order.
//!
//! # Limitations
//! - Binary files are not supported.
//! - Higher-order elements are not supported.
//! - Only the first occurrence of each section marker is read.
//!
//! [`CellType::from_tag`]: crate::topology::cell_type::CellType::from_tag

pub mod scanner;
pub(crate) mod sections;

use crate::debug_invariants::DebugInvariants;
use crate::mesh::Mesh;
use crate::mesh_error::MeshError;
use crate::topology::cell::{Element, Surface};
use scanner::SectionScanner;
use sections::SectionRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Marker lines that open each section.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SectionKeywords {
    pub vertices: String,
    pub elements: String,
    pub surfaces: String,
}

impl Default for SectionKeywords {
    fn default() -> Self {
        Self {
            vertices: "$Nodes".into(),
            elements: "$Elements".into(),
            surfaces: "$Surfaces".into(),
        }
    }
}

impl SectionKeywords {
    /// True if `line` (already trimmed) opens any section.
    pub fn is_marker(&self, line: &str) -> bool {
        line == self.vertices || line == self.elements || line == self.surfaces
    }
}

/// Field layout of element and surface records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RecordLayout {
    /// `id type v1 .. vk`
    #[default]
    Plain,
    /// `id type ntags t1 .. tn v1 .. vk`, as in Gmsh 2.2 `$Elements`.
    GmshTagged,
}

/// What to do when a vertex id appears more than once.
///
/// Under `Warn` and `Ignore` both vertices are stored and id lookup
/// resolves to the later one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DuplicateVertexHandling {
    #[default]
    Warn,
    Ignore,
    Error,
}

/// Options controlling [`MeshReader`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub keywords: SectionKeywords,
    pub layout: RecordLayout,
    pub duplicate_vertices: DuplicateVertexHandling,
    /// Fail with `SectionNotFound` when the element section is absent.
    pub require_elements: bool,
    /// Fail with `SectionNotFound` when the surface section is absent.
    pub require_surfaces: bool,
}

/// Reader turning mesh file text into a [`Mesh`].
#[derive(Clone, Debug, Default)]
pub struct MeshReader {
    options: LoadOptions,
}

impl MeshReader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Opens `path`, reads it fully and parses it. The file is closed
    /// before parsing starts.
    ///
    /// # Errors
    /// `FileNotFound` if the file cannot be opened; otherwise see
    /// [`read_str`](Self::read_str).
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Mesh, MeshError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MeshError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Reading mesh file {}", path.display());
        self.read(BufReader::new(file))
    }

    /// Parses mesh data from a reader. Non-UTF-8 input fails with `Io`.
    pub fn read<R: Read>(&self, mut reader: R) -> Result<Mesh, MeshError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        drop(reader);
        self.read_str(&contents)
    }

    /// Parses mesh text.
    ///
    /// The vertex section is read first and is mandatory. Element and
    /// surface sections follow, each located by a fresh scan from the top,
    /// and are optional unless the options say otherwise. Any failure
    /// aborts the whole load.
    pub fn read_str(&self, contents: &str) -> Result<Mesh, MeshError> {
        let keywords = &self.options.keywords;
        let mut mesh = Mesh::new();

        let mut scanner = SectionScanner::new(contents);
        let marker_line = scanner.locate(&keywords.vertices)?;
        let count = sections::read_vertices(&mut scanner, &mut mesh, &self.options)?;
        log::debug!(
            "Section `{}` at line {marker_line}: {count} vertices",
            keywords.vertices
        );

        self.read_cell_section::<Element>(
            contents,
            &keywords.elements,
            self.options.require_elements,
            &mut mesh,
        )?;
        self.read_cell_section::<Surface>(
            contents,
            &keywords.surfaces,
            self.options.require_surfaces,
            &mut mesh,
        )?;

        mesh.debug_assert_invariants();
        log::info!(
            "Loaded mesh: {} vertices, {} elements, {} surfaces",
            mesh.vertex_count(),
            mesh.element_count(),
            mesh.surface_count()
        );
        Ok(mesh)
    }

    fn read_cell_section<C: SectionRecord>(
        &self,
        contents: &str,
        keyword: &str,
        required: bool,
        mesh: &mut Mesh,
    ) -> Result<(), MeshError> {
        let mut scanner = SectionScanner::new(contents);
        let marker_line = match scanner.locate(keyword) {
            Ok(line) => line,
            Err(err @ MeshError::SectionNotFound { .. }) if required => return Err(err),
            Err(MeshError::SectionNotFound { .. }) => {
                log::debug!("Section `{keyword}` absent; no {}s", C::KIND);
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let count = sections::read_cells::<C>(&mut scanner, mesh, &self.options)?;
        log::debug!(
            "Section `{keyword}` at line {marker_line}: {count} {}s",
            C::KIND
        );
        Ok(())
    }
}

/// Loads a mesh file with default options.
///
/// The default layout is [`RecordLayout::Plain`]. Gmsh `.msh` files put
/// tag fields after the cell type, so read them through
/// [`load_with_options`] with [`RecordLayout::GmshTagged`].
///
/// # Example
/// ```no_run
/// # fn main() -> Result<(), readmesh::mesh_error::MeshError> {
/// use readmesh::io::{LoadOptions, RecordLayout};
/// use readmesh::topology::VertexId;
/// let mesh = readmesh::load("cube.mesh")?;
/// println!("{} vertices, {} elements", mesh.vertex_count(), mesh.element_count());
/// let corner = mesh.find_vertex(VertexId::new(1));
/// # let _ = corner;
///
/// let options = LoadOptions {
///     layout: RecordLayout::GmshTagged,
///     ..Default::default()
/// };
/// let gmsh = readmesh::load_with_options("cube.msh", options)?;
/// # let _ = gmsh;
/// # Ok(())
/// # }
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh, MeshError> {
    MeshReader::default().read_path(path)
}

/// Loads a mesh file with explicit options.
pub fn load_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Mesh, MeshError> {
    MeshReader::new(options).read_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_with_defaults() {
        let options: LoadOptions =
            serde_json::from_str(r#"{"keywords":{"vertices":"*NODE"},"duplicate_vertices":"Error"}"#)
                .unwrap();
        assert_eq!(options.keywords.vertices, "*NODE");
        assert_eq!(options.keywords.elements, "$Elements");
        assert_eq!(options.duplicate_vertices, DuplicateVertexHandling::Error);
        assert_eq!(options.layout, RecordLayout::Plain);
        assert!(!options.require_elements);
    }

    #[test]
    fn marker_detection() {
        let kw = SectionKeywords::default();
        assert!(kw.is_marker("$Surfaces"));
        assert!(!kw.is_marker("$EndNodes"));
    }

    #[test]
    fn read_from_reader() {
        let text = "$Nodes\n1\n1 0 0 0\n";
        let mesh = MeshReader::default().read(text.as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count(), 1);
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let bytes: &[u8] = &[b'$', 0xff, 0xfe, b'\n'];
        let err = MeshReader::default().read(bytes).unwrap_err();
        assert!(matches!(err, MeshError::Io(_)), "unexpected error: {err:?}");
    }
}
