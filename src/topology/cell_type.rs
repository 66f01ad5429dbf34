//! Cell shapes and their on-disk type tags.
//!
//! Type tags follow the Gmsh element numbering used by the mesh files this
//! crate reads. Only first-order shapes are recognised; every shape has a
//! fixed vertex count, which is what the record parsers check against.

use std::fmt;

/// Common cell shapes for elements and surfaces.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CellType {
    /// 0D point cell.
    Vertex,
    /// 1D segment/edge.
    Segment,
    /// 2D simplex (triangle).
    Triangle,
    /// 2D tensor-product cell (quad).
    Quadrilateral,
    /// 3D simplex (tet).
    Tetrahedron,
    /// 3D tensor-product cell (hex).
    Hexahedron,
    /// 3D wedge/prism.
    Prism,
    /// 3D pyramid.
    Pyramid,
}

impl CellType {
    /// Every recognised shape, in tag order of the file format.
    pub const ALL: [CellType; 8] = [
        CellType::Segment,
        CellType::Triangle,
        CellType::Quadrilateral,
        CellType::Tetrahedron,
        CellType::Hexahedron,
        CellType::Prism,
        CellType::Pyramid,
        CellType::Vertex,
    ];

    /// Maps a file type tag to a shape, `None` for unsupported tags.
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            1 => Some(CellType::Segment),
            2 => Some(CellType::Triangle),
            3 => Some(CellType::Quadrilateral),
            4 => Some(CellType::Tetrahedron),
            5 => Some(CellType::Hexahedron),
            6 => Some(CellType::Prism),
            7 => Some(CellType::Pyramid),
            15 => Some(CellType::Vertex),
            _ => None,
        }
    }

    /// The file type tag for this shape.
    pub fn tag(self) -> u32 {
        match self {
            CellType::Segment => 1,
            CellType::Triangle => 2,
            CellType::Quadrilateral => 3,
            CellType::Tetrahedron => 4,
            CellType::Hexahedron => 5,
            CellType::Prism => 6,
            CellType::Pyramid => 7,
            CellType::Vertex => 15,
        }
    }

    /// Number of vertex ids a record of this shape must list.
    pub fn node_count(self) -> usize {
        match self {
            CellType::Vertex => 1,
            CellType::Segment => 2,
            CellType::Triangle => 3,
            CellType::Quadrilateral => 4,
            CellType::Tetrahedron => 4,
            CellType::Hexahedron => 8,
            CellType::Prism => 6,
            CellType::Pyramid => 5,
        }
    }

    /// Returns the topological dimension of the cell.
    pub fn dimension(self) -> u8 {
        match self {
            CellType::Vertex => 0,
            CellType::Segment => 1,
            CellType::Triangle | CellType::Quadrilateral => 2,
            CellType::Tetrahedron | CellType::Hexahedron | CellType::Prism | CellType::Pyramid => 3,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Vertex => "vertex",
            CellType::Segment => "segment",
            CellType::Triangle => "triangle",
            CellType::Quadrilateral => "quadrilateral",
            CellType::Tetrahedron => "tetrahedron",
            CellType::Hexahedron => "hexahedron",
            CellType::Prism => "prism",
            CellType::Pyramid => "pyramid",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_map_both_ways() {
        for ty in CellType::ALL {
            assert_eq!(CellType::from_tag(ty.tag()), Some(ty));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(CellType::from_tag(0), None);
        assert_eq!(CellType::from_tag(8), None);
        assert_eq!(CellType::from_tag(11), None);
    }

    #[test]
    fn node_counts_match_shapes() {
        assert_eq!(CellType::Tetrahedron.node_count(), 4);
        assert_eq!(CellType::Hexahedron.node_count(), 8);
        assert_eq!(CellType::Triangle.node_count(), 3);
        assert_eq!(CellType::Pyramid.node_count(), 5);
    }

    #[test]
    fn dimensions() {
        assert_eq!(CellType::Vertex.dimension(), 0);
        assert_eq!(CellType::Quadrilateral.dimension(), 2);
        assert_eq!(CellType::Prism.dimension(), 3);
    }
}
