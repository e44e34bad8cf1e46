use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pcb_geometry::polygon_builder::{make_arc_trace, make_circle, make_line_trace, make_rectangle};
use pcb_geometry::testing::sample_board;
use pcb_geometry::{Angle, BoardSide, Point, PolygonCollector, Size, Transformation, Traversal, TraversalOptions};
use rand::Rng;

fn generate_random_points(count: usize) -> Vec<Point> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(-100_000_000..100_000_000),
                rng.random_range(-100_000_000..100_000_000),
            )
        })
        .collect()
}

fn benchmark_builders(c: &mut Criterion) {
    let centers = generate_random_points(1000);
    let mut rng = rand::rng();
    let rotations: Vec<Angle> = (0..centers.len())
        .map(|_| Angle::from_hundredths(rng.random_range(0..36000)))
        .collect();

    let mut group = c.benchmark_group("Polygon Builders");

    group.bench_function("make_circle", |b| {
        b.iter(|| {
            for center in &centers {
                black_box(make_circle(black_box(*center), 500_000));
            }
        })
    });

    group.bench_function("make_rectangle_rotated_rounded", |b| {
        b.iter(|| {
            for (center, rotation) in centers.iter().zip(&rotations) {
                black_box(make_rectangle(*center, Size::new(1_500_000, 800_000), 200_000, black_box(*rotation)));
            }
        })
    });

    group.bench_function("make_line_trace", |b| {
        b.iter(|| {
            for pair in centers.windows(2) {
                black_box(make_line_trace(pair[0], pair[1], 250_000, true));
            }
        })
    });

    group.bench_function("make_arc_trace", |b| {
        b.iter(|| {
            for (center, rotation) in centers.iter().zip(&rotations) {
                black_box(make_arc_trace(*center, 5_000_000, *rotation, Angle::DEG_90, 250_000, true));
            }
        })
    });

    group.finish();
}

fn benchmark_transforms(c: &mut Criterion) {
    let points = generate_random_points(10000);
    let transformation = Transformation::for_placement(Point::from_mm(25.0, 40.0), Angle::from_degrees(30), BoardSide::Bottom);

    let mut group = c.benchmark_group("Point Transformations");

    group.bench_function("apply_to_point", |b| {
        b.iter(|| {
            for point in &points {
                black_box(transformation.apply_to_point(black_box(*point)));
            }
        })
    });

    group.bench_function("apply_to_points", |b| {
        b.iter(|| {
            let mut points = points.clone();
            transformation.apply_to_points(&mut points);
            black_box(points);
        })
    });

    group.finish();
}

fn benchmark_traversal(c: &mut Criterion) {
    let sample = sample_board();

    c.bench_function("collect_polygons", |b| {
        b.iter(|| {
            let mut collector = PolygonCollector::default();
            Traversal::new(&sample.board, TraversalOptions::default()).run(&mut collector);
            black_box(collector.polygons);
        })
    });
}

criterion_group!(benches, benchmark_builders, benchmark_transforms, benchmark_traversal);
criterion_main!(benches);
