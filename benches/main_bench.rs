use conway_grid::Grid;
use criterion::{criterion_group, criterion_main, Criterion};

const SEED: u64 = 42;

fn bench_advance(c: &mut Criterion) {
    const N: usize = 1 << 9;
    let mut life = Grid::random(N, N, Some(SEED)).unwrap();
    c.bench_function("advance", |b| b.iter(|| life.advance()));
}

fn bench_advance_parallel(c: &mut Criterion) {
    const N: usize = 1 << 9;
    let mut life = Grid::random(N, N, Some(SEED)).unwrap();
    c.bench_function("advance_parallel", |b| b.iter(|| life.advance_parallel()));
}

// default field of the window
fn bench_advance_small(c: &mut Criterion) {
    let mut life = Grid::random(30, 30, Some(SEED)).unwrap();
    c.bench_function("advance_30x30", |b| b.iter(|| life.advance()));
}

criterion_group!(
    benches,
    bench_advance,
    bench_advance_parallel,
    bench_advance_small,
);
criterion_main!(benches);
