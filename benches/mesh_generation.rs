use criterion::{black_box, criterion_group, criterion_main, Criterion};

use foilmesh::airfoil::naca::NacaCode;
use foilmesh::stl::write_stl;
use foilmesh::{generate_mesh, MeshConfig};

fn benchmark(c: &mut Criterion) {
    let code: NacaCode = "2412".parse().unwrap();
    let config = MeshConfig::default();

    c.bench_function("Generate NACA 2412 mesh", |b| {
        b.iter(|| generate_mesh(black_box(&code), black_box(4.0), &config).unwrap())
    });

    let facets = generate_mesh(&code, 4.0, &config).unwrap().facets().unwrap();
    c.bench_function("Serialize NACA 2412 facets", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(3_000_000);
            write_stl(&mut out, "airfoil", black_box(&facets)).unwrap();
            out
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
