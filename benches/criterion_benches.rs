#[macro_use]
extern crate criterion;

extern crate gridlock_solver;

use criterion::{Benchmark, Criterion};

use gridlock_solver::config::Mode;
use gridlock_solver::factory;
use gridlock_solver::Solve;

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_easy(c: &mut Criterion) {
    bench_puzzle(c, Mode::FirstSolution, "easy", 50);
}

#[allow(unused)]
fn bench_easy_exhaustive(c: &mut Criterion) {
    bench_puzzle(c, Mode::Exhaustive, "easy", 25);
}

#[allow(unused)]
fn bench_hard(c: &mut Criterion) {
    bench_puzzle(c, Mode::FirstSolution, "hard", 25);
}

fn bench_puzzle(c: &mut Criterion, mode: Mode, name: &str, samples: usize) {
    let board = factory::by_name(name).unwrap();

    c.bench(
        &format!("{}", mode),
        Benchmark::new(name, move |b| {
            b.iter(|| {
                criterion::black_box(
                    board.solve(criterion::black_box(mode), criterion::black_box(false)),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_easy,
    //bench_easy_exhaustive,
    //bench_hard,
);
criterion_main!(benches);
