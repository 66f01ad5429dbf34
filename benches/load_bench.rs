use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::fmt::Write;

use readmesh::io::MeshReader;

/// Tetrahedral strip: `n` tets sharing faces, ids offset so they never
/// match storage positions.
fn tet_strip(n: usize) -> String {
    const OFFSET: usize = 1000;
    let mut out = String::new();
    writeln!(out, "$Nodes\n{}", n + 3).unwrap();
    for i in 0..n + 3 {
        writeln!(out, "{} {} {} {}", OFFSET + i, i as f64 * 0.5, (i % 2) as f64, (i % 3) as f64)
            .unwrap();
    }
    writeln!(out, "$EndNodes\n$Elements\n{n}").unwrap();
    for e in 0..n {
        let v = OFFSET + e;
        writeln!(out, "{} 4 {} {} {} {}", e + 1, v, v + 1, v + 2, v + 3).unwrap();
    }
    writeln!(out, "$EndElements").unwrap();
    out
}

fn bench_load(c: &mut Criterion) {
    let reader = MeshReader::default();
    let mut group = c.benchmark_group("read_str");
    for &n in &[1_000usize, 10_000, 100_000] {
        let text = tet_strip(n);
        group.bench_with_input(BenchmarkId::new("tet_strip", n), &text, |b, text| {
            b.iter(|| {
                let mesh = reader.read_str(black_box(text)).expect("valid mesh");
                black_box(mesh.element_count())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load);
criterion_main!(benches);
