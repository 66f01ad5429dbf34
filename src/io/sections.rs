//! Record parsers for the vertex, element and surface sections.
//!
//! Each parser expects the scanner to sit right after its section marker,
//! reads the count line, then exactly that many records. Entities are
//! appended to the mesh in file order. Element and surface records are
//! resolved against the vertex id index as they are appended.

use crate::io::scanner::SectionScanner;
use crate::io::{DuplicateVertexHandling, LoadOptions, RecordLayout};
use crate::mesh::Mesh;
use crate::mesh_error::MeshError;
use crate::topology::cell::{CellKind, CellRecord, Element, Surface};
use crate::topology::cell_type::CellType;
use crate::topology::id::VertexId;
use crate::topology::vertex::Vertex;
use std::str::SplitWhitespace;

/// Element and surface records as the cell parser builds and stores them.
pub(crate) trait SectionRecord: CellRecord + Sized {
    fn build(
        id: u64,
        cell_type: CellType,
        vertex_ids: Vec<VertexId>,
        tags: Vec<u64>,
    ) -> Result<Self, MeshError>;

    fn append(self, mesh: &mut Mesh) -> Result<usize, MeshError>;
}

impl SectionRecord for Element {
    fn build(
        id: u64,
        cell_type: CellType,
        vertex_ids: Vec<VertexId>,
        tags: Vec<u64>,
    ) -> Result<Self, MeshError> {
        Ok(Element::new(id, cell_type, vertex_ids)?.with_tags(tags))
    }

    fn append(self, mesh: &mut Mesh) -> Result<usize, MeshError> {
        mesh.push_element(self)
    }
}

impl SectionRecord for Surface {
    fn build(
        id: u64,
        cell_type: CellType,
        vertex_ids: Vec<VertexId>,
        tags: Vec<u64>,
    ) -> Result<Self, MeshError> {
        Ok(Surface::new(id, cell_type, vertex_ids)?.with_tags(tags))
    }

    fn append(self, mesh: &mut Mesh) -> Result<usize, MeshError> {
        mesh.push_surface(self)
    }
}

fn section_name(kind: Option<CellKind>) -> &'static str {
    match kind {
        None => "vertex",
        Some(CellKind::Element) => "element",
        Some(CellKind::Surface) => "surface",
    }
}

/// Fetches record `found` of `declared`, turning an early stop into a `ParseError`.
fn next_record<'a>(
    scanner: &mut SectionScanner<'a>,
    options: &LoadOptions,
    section: &str,
    declared: usize,
    found: usize,
) -> Result<(usize, &'a str), MeshError> {
    let Some((line_no, line)) = scanner.next_record() else {
        return Err(MeshError::parse(
            scanner.line_number() + 1,
            "",
            format!(
                "unexpected end of file: {section} section declares {declared} records, found {found}"
            ),
        ));
    };
    if options.keywords.is_marker(line.trim()) {
        return Err(MeshError::parse(
            line_no,
            line,
            format!("{section} section ended early: declares {declared} records, found {found}"),
        ));
    }
    Ok((line_no, line))
}

fn field<'a>(
    fields: &mut SplitWhitespace<'a>,
    line_no: usize,
    line: &str,
    what: &str,
) -> Result<&'a str, MeshError> {
    fields
        .next()
        .ok_or_else(|| MeshError::parse(line_no, line, format!("missing {what}")))
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    line_no: usize,
    line: &str,
    what: &str,
) -> Result<T, MeshError> {
    raw.parse::<T>()
        .map_err(|_| MeshError::parse(line_no, line, format!("invalid {what}: {raw}")))
}

/// Reads the vertex section. Returns the number of vertices appended.
pub(crate) fn read_vertices(
    scanner: &mut SectionScanner<'_>,
    mesh: &mut Mesh,
    options: &LoadOptions,
) -> Result<usize, MeshError> {
    let section = section_name(None);
    let count = scanner.read_count(section)?;
    for found in 0..count {
        let (line_no, line) = next_record(scanner, options, section, count, found)?;
        let mut fields = line.split_whitespace();
        let id: u64 = parse_field(
            field(&mut fields, line_no, line, "vertex id")?,
            line_no,
            line,
            "vertex id",
        )?;
        let mut xyz = [0.0f64; 3];
        for (coord, axis) in xyz.iter_mut().zip(["x", "y", "z"]) {
            let what = format!("{axis} coordinate");
            *coord = parse_field(field(&mut fields, line_no, line, &what)?, line_no, line, &what)?;
        }
        if fields.next().is_some() {
            return Err(MeshError::parse(
                line_no,
                line,
                "unexpected fields after vertex coordinates",
            ));
        }

        let vid = VertexId::new(id);
        if mesh.contains_vertex(vid) {
            match options.duplicate_vertices {
                DuplicateVertexHandling::Warn => {
                    log::warn!(
                        "Duplicate vertex id {vid} on line {line_no}; lookups resolve to the later vertex"
                    );
                }
                DuplicateVertexHandling::Ignore => {}
                DuplicateVertexHandling::Error => {
                    return Err(MeshError::DuplicateVertexId {
                        id: vid,
                        line: line_no,
                    });
                }
            }
        }
        mesh.push_vertex(Vertex::new(id, xyz));
    }
    Ok(count)
}

/// Reads an element or surface section. Returns the number of records appended.
pub(crate) fn read_cells<C: SectionRecord>(
    scanner: &mut SectionScanner<'_>,
    mesh: &mut Mesh,
    options: &LoadOptions,
) -> Result<usize, MeshError> {
    let section = section_name(Some(C::KIND));
    let count = scanner.read_count(section)?;
    for found in 0..count {
        let (line_no, line) = next_record(scanner, options, section, count, found)?;
        let record = parse_cell::<C>(line_no, line, options.layout)?;
        record.append(mesh)?;
    }
    Ok(count)
}

fn parse_cell<C: SectionRecord>(
    line_no: usize,
    line: &str,
    layout: RecordLayout,
) -> Result<C, MeshError> {
    let section = section_name(Some(C::KIND));
    let mut fields = line.split_whitespace();

    let id_what = format!("{section} id");
    let id: u64 = parse_field(
        field(&mut fields, line_no, line, &id_what)?,
        line_no,
        line,
        &id_what,
    )?;
    let tag: u32 = parse_field(
        field(&mut fields, line_no, line, "cell type")?,
        line_no,
        line,
        "cell type",
    )?;
    let cell_type =
        CellType::from_tag(tag).ok_or(MeshError::UnsupportedCellType { line: line_no, tag })?;

    let tags = match layout {
        RecordLayout::Plain => Vec::new(),
        RecordLayout::GmshTagged => {
            let n: usize = parse_field(
                field(&mut fields, line_no, line, "tag count")?,
                line_no,
                line,
                "tag count",
            )?;
            (0..n)
                .map(|_| {
                    parse_field::<u64>(field(&mut fields, line_no, line, "tag")?, line_no, line, "tag")
                })
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let vertex_ids = fields
        .map(|raw| parse_field::<u64>(raw, line_no, line, "vertex id").map(VertexId::new))
        .collect::<Result<Vec<_>, _>>()?;
    let expected = cell_type.node_count();
    if vertex_ids.len() != expected {
        return Err(MeshError::MalformedRecord {
            line: line_no,
            id: id.into(),
            cell_type,
            expected,
            found: vertex_ids.len(),
        });
    }
    C::build(id, cell_type, vertex_ids, tags)
}
