//! Benchmarks for small triangle collapse, serial vs parallel measurement

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meshmend_core::{Point3f, TriangleMesh};
use meshmend_repair::{CollapseSmallTriangles, MeshRepairer};

/// Grid with every fourth row squeezed so that it produces sliver faces
fn generate_sliver_grid(size: usize) -> TriangleMesh {
    let mut vertices = Vec::with_capacity(size * size);
    for y in 0..size {
        let fy = if y % 4 == 3 { y as f32 - 0.999 } else { y as f32 };
        for x in 0..size {
            let fx = x as f32 / (size - 1) as f32 * std::f32::consts::PI;
            vertices.push(Point3f::new(x as f32, fy, fx.sin()));
        }
    }
    let mut faces = Vec::with_capacity((size - 1) * (size - 1) * 2);
    for y in 0..(size - 1) {
        for x in 0..(size - 1) {
            let tl = y * size + x;
            let tr = tl + 1;
            let bl = (y + 1) * size + x;
            let br = bl + 1;
            faces.push([tl, bl, tr]);
            faces.push([tr, bl, br]);
        }
    }
    TriangleMesh::from_vertices_and_faces(vertices, faces)
}

fn bench_small_triangles(c: &mut Criterion) {
    let sizes = [20, 60, 120];

    let mut group = c.benchmark_group("small_triangles");

    for &size in &sizes {
        let mesh = generate_sliver_grid(size);
        let face_count = mesh.face_count();

        for parallel in [false, true] {
            let name = if parallel { "parallel" } else { "serial" };
            group.bench_with_input(
                BenchmarkId::new(name, format!("{}f", face_count)),
                &mesh,
                |b, mesh| {
                    let collapser = CollapseSmallTriangles::with_eps(1e-6).parallel(parallel);
                    b.iter(|| {
                        let result = collapser.repair(black_box(mesh)).unwrap();
                        black_box(result);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_small_triangles);
criterion_main!(benches);
