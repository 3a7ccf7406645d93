use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use weft_automata::{GridAutomaton, RowAutomaton};

fn bench_grid_step(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = GridAutomaton::with_density(128, 0.3, &mut rng).unwrap();

    c.bench_function("grid_step_128", |b| b.iter(|| grid.step()));
}

fn bench_row_step(c: &mut Criterion) {
    let mut rows = RowAutomaton::new(1024, usize::MAX, 110).unwrap();

    c.bench_function("row_step_1024", |b| b.iter(|| rows.step()));
}

criterion_group!(benches, bench_grid_step, bench_row_step);
criterion_main!(benches);
