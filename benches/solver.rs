//! Benchmarks for the sliding puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use slider::board::{parse_board, Board};
use slider::heuristic::{Heuristic, ManhattanDistance, MisplacedTiles};
use slider::moves::neighbors;
use slider::solvability::count_inversions;
use slider::solver::search;

/// A 22-move instance used across benchmarks.
fn hard_start() -> Board {
    parse_board("5 2 8 4 1 7 0 3 6").unwrap()
}

/// Benchmark a full A* solve under each heuristic.
fn bench_search(c: &mut Criterion) {
    let start = hard_start();
    let goal = Board::goal(3).unwrap();

    let mut group = c.benchmark_group("search");
    group.bench_function("manhattan", |b| {
        b.iter(|| search(black_box(&start), &goal, &ManhattanDistance))
    });
    group.sample_size(10);
    group.bench_function("misplaced", |b| {
        b.iter(|| search(black_box(&start), &goal, &MisplacedTiles))
    });
    group.finish();
}

/// Benchmark the two heuristic evaluations.
fn bench_heuristics(c: &mut Criterion) {
    let start = hard_start();
    let goal = Board::goal(3).unwrap();

    c.bench_function("manhattan_estimate", |b| {
        b.iter(|| ManhattanDistance.estimate(black_box(&start), &goal))
    });
    c.bench_function("misplaced_estimate", |b| {
        b.iter(|| MisplacedTiles.estimate(black_box(&start), &goal))
    });
}

/// Benchmark successor generation from a center blank.
fn bench_neighbors(c: &mut Criterion) {
    let board = parse_board("1 2 3 4 0 5 6 7 8").unwrap();

    c.bench_function("neighbors", |b| b.iter(|| neighbors(black_box(&board))));
}

/// Benchmark the Fenwick-tree inversion count on a 4x4 board.
fn bench_inversions(c: &mut Criterion) {
    let board = parse_board("12 1 10 2 7 11 4 14 5 0 9 15 8 13 6 3").unwrap();

    c.bench_function("count_inversions", |b| {
        b.iter(|| count_inversions(black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_search,
    bench_heuristics,
    bench_neighbors,
    bench_inversions
);
criterion_main!(benches);
