use cellgrid::{Grid, HexGrid, Point2, SquareGrid, TriGrid, TrihexGrid};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_grid<G: Grid>(c: &mut Criterion, name: &str, grid: G) {
    let mut group = c.benchmark_group(name);
    let from = Point2::new(-40.3, 12.1);
    let to = Point2::new(57.9, -33.4);
    group.bench_function("line", |b| {
        b.iter(|| grid.line_intersect(black_box(from), black_box(to)).count())
    });
    group.bench_function("rect", |b| {
        b.iter(|| {
            grid.rect_intersect(black_box(from), black_box(60.0), 25.0)
                .count()
        })
    });
    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_grid(c, "tri", TriGrid::default());
    bench_grid(c, "hex", HexGrid::default());
    bench_grid(c, "trihex", TrihexGrid::default());
    bench_grid(c, "square", SquareGrid::default());
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
