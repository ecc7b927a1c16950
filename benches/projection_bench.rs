use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::Point2;

use _rust::proj::generalized_mercator::GeneralizedMercator;
use _rust::proj::sphere::LatLng;

fn make_projection() -> GeneralizedMercator {
    GeneralizedMercator::new(LatLng::new(PI / 3.0, 0.0), LatLng::new(-PI / 3.0, 0.0)).unwrap()
}

fn bench_new(c: &mut Criterion) {
    let pairs = [
        (LatLng::new(PI / 3.0, 0.0), LatLng::new(-PI / 3.0, 0.0)),
        (LatLng::new(PI / 4.0, PI / 4.0), LatLng::new(-PI / 4.0, -3.0 * PI / 4.0)),
    ];
    c.bench_function("new_non_antipodal", |b| {
        b.iter(|| GeneralizedMercator::new(black_box(pairs[0].0), black_box(pairs[0].1)).unwrap())
    });
    c.bench_function("new_antipodal", |b| {
        b.iter(|| GeneralizedMercator::new(black_box(pairs[1].0), black_box(pairs[1].1)).unwrap())
    });
}

fn bench_project(c: &mut Criterion) {
    let gm = make_projection();
    let ll = LatLng::new(PI / 4.0, 3.0 * PI / 4.0);
    c.bench_function("project", |b| b.iter(|| gm.project(black_box(ll))));
}

fn bench_unproject(c: &mut Criterion) {
    let gm = make_projection();
    let p = Point2::new(1.0, 1.0);
    c.bench_function("unproject", |b| b.iter(|| gm.unproject(black_box(p))));
}

criterion_group!(benches, bench_new, bench_project, bench_unproject);
criterion_main!(benches);
