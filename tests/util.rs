#![allow(dead_code)]
use readmesh::topology::VertexId;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn vid(u: u64) -> VertexId {
    VertexId::new(u)
}

/// Writes `contents` to `mesh.msh` in a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_mesh(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("mesh.msh");
    let mut file = std::fs::File::create(&path).expect("create mesh file");
    file.write_all(contents.as_bytes()).expect("write mesh file");
    (dir, path)
}

/// Text for an `n x n x n` block of hexahedra.
///
/// Records use the Gmsh-tagged layout. Vertex ids start at 1 and run
/// x-fastest; every hexahedron carries tag 1. The six faces of the block are
/// emitted as quadrilateral surfaces tagged with their face number (1..=6).
pub fn hex_block(n: usize) -> String {
    use std::fmt::Write as _;

    let p = n + 1;
    let node = |i: usize, j: usize, k: usize| 1 + i + p * (j + p * k);
    let mut out = String::new();

    writeln!(out, "$MeshFormat\n2.2 0 8\n$EndMeshFormat").unwrap();
    writeln!(out, "$Nodes\n{}", p * p * p).unwrap();
    for k in 0..p {
        for j in 0..p {
            for i in 0..p {
                writeln!(out, "{} {} {} {}", node(i, j, k), i, j, k).unwrap();
            }
        }
    }
    writeln!(out, "$EndNodes").unwrap();

    writeln!(out, "$Elements\n{}", n * n * n).unwrap();
    let mut id = 1;
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                writeln!(
                    out,
                    "{id} 5 1 1 {} {} {} {} {} {} {} {}",
                    node(i, j, k),
                    node(i + 1, j, k),
                    node(i + 1, j + 1, k),
                    node(i, j + 1, k),
                    node(i, j, k + 1),
                    node(i + 1, j, k + 1),
                    node(i + 1, j + 1, k + 1),
                    node(i, j + 1, k + 1),
                )
                .unwrap();
                id += 1;
            }
        }
    }
    writeln!(out, "$EndElements").unwrap();

    writeln!(out, "$Surfaces\n{}", 6 * n * n).unwrap();
    let mut id = 1;
    for a in 0..n {
        for b in 0..n {
            let faces = [
                [node(a, b, 0), node(a + 1, b, 0), node(a + 1, b + 1, 0), node(a, b + 1, 0)],
                [node(a, b, n), node(a + 1, b, n), node(a + 1, b + 1, n), node(a, b + 1, n)],
                [node(a, 0, b), node(a + 1, 0, b), node(a + 1, 0, b + 1), node(a, 0, b + 1)],
                [node(a, n, b), node(a + 1, n, b), node(a + 1, n, b + 1), node(a, n, b + 1)],
                [node(0, a, b), node(0, a + 1, b), node(0, a + 1, b + 1), node(0, a, b + 1)],
                [node(n, a, b), node(n, a + 1, b), node(n, a + 1, b + 1), node(n, a, b + 1)],
            ];
            for (face, q) in faces.iter().enumerate() {
                writeln!(out, "{id} 3 1 {} {} {} {} {}", face + 1, q[0], q[1], q[2], q[3]).unwrap();
                id += 1;
            }
        }
    }
    writeln!(out, "$EndSurfaces").unwrap();
    out
}
