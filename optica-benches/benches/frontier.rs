//! Seed frontier benchmarks.
//!
//! Replays a seeded mix of enqueue, move-up and dequeue operations, the
//! pattern the ordering loop produces while expanding dense regions.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use optica_benches::params::FrontierBenchParams;
use optica_core::SeedFrontier;

const SEED: u64 = 7;
const CASES: &[FrontierBenchParams] = &[
    FrontierBenchParams {
        points: 64,
        operations: 10_000,
    },
    FrontierBenchParams {
        points: 4_096,
        operations: 10_000,
    },
];

#[derive(Clone, Copy)]
enum Op {
    Enqueue(usize, f64),
    MoveUp(usize, f64),
    Dequeue,
}

fn script(params: &FrontierBenchParams) -> Vec<Op> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    (0..params.operations)
        .map(|_| {
            let id = rng.gen_range(0..params.points);
            let key: f64 = rng.gen_range(0.0..10.0);
            match rng.gen_range(0..4_u8) {
                0 | 1 => Op::Enqueue(id, key),
                2 => Op::MoveUp(id, key),
                _ => Op::Dequeue,
            }
        })
        .collect()
}

fn frontier_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_frontier");

    for params in CASES {
        let ops = script(params);
        group.bench_with_input(BenchmarkId::from_parameter(params), &ops, |b, ops| {
            b.iter(|| {
                let mut frontier = SeedFrontier::with_capacity(params.points);
                for op in ops {
                    match *op {
                        Op::Enqueue(id, key) => frontier.enqueue(id, key),
                        Op::MoveUp(id, key) => frontier.move_up(id, key),
                        Op::Dequeue => {
                            black_box(frontier.dequeue());
                        }
                    }
                }
                black_box(frontier.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, frontier_ops);
criterion_main!(benches);
