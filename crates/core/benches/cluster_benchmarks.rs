use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scholarmap::{Point, QuadTree, Region, SpatialPoint, resolve};

fn scatter(count: usize) -> Vec<SpatialPoint> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|i| {
            let lon = rng.gen_range(-180.0..180.0);
            let lat = rng.gen_range(-85.0..85.0);
            let key = format!("scholar:{i}");
            SpatialPoint::new(key.clone(), Point::new(lon, lat), key, "somewhere")
        })
        .collect()
}

fn benchmark_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");

    for count in [100, 1_000, 10_000] {
        let points = scatter(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            let mut tree = QuadTree::new(Region::world());
            b.iter(|| tree.rebuild(Region::world(), black_box(points.clone())))
        });
    }

    group.finish();
}

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let mut tree = QuadTree::new(Region::world());
    tree.rebuild(Region::world(), scatter(10_000));
    let viewport = Region::new(-30.0, -20.0, 30.0, 20.0);

    for span in [0.0, 2.0, 8.0] {
        group.bench_with_input(BenchmarkId::from_parameter(span), &span, |b, &span| {
            b.iter(|| resolve(black_box(&tree), black_box(&viewport), span, 1.0))
        });
    }

    group.finish();
}

fn benchmark_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");

    let mut tree = QuadTree::new(Region::world());
    tree.rebuild(Region::world(), scatter(10_000));
    let center = Point::new(0.0, 0.0);

    for k in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| tree.nearest(black_box(&center), k))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_rebuild,
    benchmark_resolve,
    benchmark_nearest
);
criterion_main!(benches);
