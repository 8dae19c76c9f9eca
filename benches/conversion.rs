use colorspaces::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_conversion(c: &mut Criterion) {
    let rgb = RGBColor::from((200, 120, 40));
    for space in ColorSpace::ALL.iter() {
        c.bench_function(&format!("convert_{}", space), |b| {
            b.iter(|| black_box(*space).convert_rgb(black_box(rgb)))
        });
    }
}

fn benchmark_lattice(c: &mut Criterion) {
    let projection = Projection::new(ColorSpace::Lab);
    c.bench_function("lattice_points_lab", |b| {
        b.iter(|| projection.lattice_points())
    });
}

fn benchmark_normalized_distance(c: &mut Criterion) {
    let a = ColorSpace::Luv.convert_rgb(RGBColor::from((12, 34, 56)));
    let b = ColorSpace::Hsi.convert_rgb(RGBColor::from((200, 100, 0)));
    c.bench_function("normalized_distance_cross_space", |bench| {
        bench.iter(|| black_box(a).normalized_distance(black_box(&b)))
    });
}

criterion_group!(
    benches,
    benchmark_conversion,
    benchmark_lattice,
    benchmark_normalized_distance
);
criterion_main!(benches);
