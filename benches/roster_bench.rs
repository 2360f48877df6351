//! Criterion benchmarks for the roster solvers.
//!
//! Uses seeded random preference matrices (feasibility forced by giving
//! every day at least one nonzero score) to compare the greedy strategy
//! against the bounded search backend.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use duty_roster::models::PreferenceMatrix;
use duty_roster::solver::{BoundedSearchSolver, GreedySolver, RosterSolver, SolverConfig};

fn random_matrix(persons: usize, days: usize, seed: u64) -> PreferenceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raw: HashMap<String, HashMap<String, i32>> = HashMap::new();

    for p in 0..persons {
        let mut day_map = HashMap::new();
        for d in 0..days {
            day_map.insert(format!("2025-08-{:02}", d + 1), rng.random_range(0..=10));
        }
        raw.insert(format!("person{p:02}"), day_map);
    }

    // Keep every day coverable: person00 scores at least 1 everywhere.
    if let Some(day_map) = raw.get_mut("person00") {
        for score in day_map.values_mut() {
            *score = (*score).max(1);
        }
    }

    PreferenceMatrix::from_scores(&raw).expect("scores are in range")
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    let config = SolverConfig::default();
    let solver = GreedySolver::new();

    for (persons, days) in [(4usize, 7usize), (8, 31), (16, 62)] {
        let matrix = random_matrix(persons, days, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{persons}_d{days}"), days),
            &matrix,
            |b, m| {
                b.iter(|| {
                    let roster = solver.solve(black_box(m), &config);
                    black_box(roster)
                })
            },
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_search");
    let config = SolverConfig::default();
    let solver = BoundedSearchSolver::new();

    for (persons, days) in [(4usize, 7usize), (8, 31)] {
        let matrix = random_matrix(persons, days, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{persons}_d{days}"), days),
            &matrix,
            |b, m| {
                b.iter(|| {
                    let roster = solver.solve(black_box(m), &config);
                    black_box(roster)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_search);
criterion_main!(benches);
