//! Benchmarks for N-Queens search.
//!
//! # Benchmarks
//!
//! - **`find_fundamental`**: Depth-first search for the first placement only.
//! - **`search_n_queens`**: Search followed by symmetry expansion.
//!
//! # Test Data
//!
//! Board sizes 8, 12, 16 and 20. Each search is deterministic, so every
//! iteration does identical work.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use queens_core::BoardSize;
use queens_solver::QueensSolver;

const SIZES: [usize; 4] = [8, 12, 16, 20];

fn bench_find_fundamental(c: &mut Criterion) {
    for size in SIZES {
        let solver = QueensSolver::new(BoardSize::new(size).unwrap());
        c.bench_with_input(
            BenchmarkId::new("find_fundamental", format!("n_{size}")),
            &solver,
            |b, solver| {
                b.iter(|| hint::black_box(solver).find_fundamental());
            },
        );
    }
}

fn bench_search_n_queens(c: &mut Criterion) {
    for size in SIZES {
        let solver = QueensSolver::new(BoardSize::new(size).unwrap());
        c.bench_with_input(
            BenchmarkId::new("search_n_queens", format!("n_{size}")),
            &solver,
            |b, solver| {
                b.iter(|| hint::black_box(solver).search_n_queens());
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_find_fundamental,
        bench_search_n_queens
);
criterion_main!(benches);
