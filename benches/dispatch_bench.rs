//! Criterion benchmarks for the dispatch strategies.
//!
//! Uses seeded synthetic traffic so timings stay comparable across
//! policies and runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use liftsim::{
    run_scenario, run_to_completion, Direction, DirectionalElevator, ElevatorConfig, Floor,
    TimedRequest, TravelElevator, DEFAULT_STEP_LIMIT,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FLOORS: Floor = 10;

fn travel_scenario(requests: usize, seed: u64) -> Vec<TimedRequest> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..requests)
        .map(|i| {
            let origin = rng.random_range(1..=FLOORS);
            let mut destination = rng.random_range(1..=FLOORS);
            while destination == origin {
                destination = rng.random_range(1..=FLOORS);
            }
            TimedRequest::new(i as u64 * 2, origin, destination)
        })
        .collect()
}

fn call_scenario(calls: usize, seed: u64) -> Vec<(Floor, Option<Direction>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..calls)
        .map(|_| {
            let floor = rng.random_range(1..=FLOORS);
            let hint = match rng.random_range(0..3) {
                0 => Some(Direction::Up),
                1 => Some(Direction::Down),
                _ => None,
            };
            (floor, hint)
        })
        .collect()
}

fn bench_travel_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("travel_policies");
    group.sample_size(10);

    let builders: [(&str, fn(ElevatorConfig) -> TravelElevator); 3] = [
        ("fcfs", TravelElevator::fcfs),
        ("scan", TravelElevator::scan),
        ("sstf", TravelElevator::sstf),
    ];

    for &n in &[10usize, 50, 200] {
        let scenario = travel_scenario(n, 42);
        for (name, build) in builders {
            group.bench_with_input(BenchmarkId::new(name, n), &scenario, |b, scenario| {
                b.iter(|| {
                    let mut car = build(ElevatorConfig::default());
                    let metrics = run_scenario(&mut car, black_box(scenario), DEFAULT_STEP_LIMIT);
                    black_box(metrics.summary())
                })
            });
        }
    }
    group.finish();
}

fn bench_rush_hour(c: &mut Criterion) {
    let mut group = c.benchmark_group("rush_hour");
    group.sample_size(10);

    for &n in &[10usize, 50, 200] {
        let calls = call_scenario(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &calls, |b, calls| {
            b.iter(|| {
                let mut car = DirectionalElevator::new(ElevatorConfig::default());
                for &(floor, hint) in calls {
                    car.add_call(floor, hint);
                }
                black_box(run_to_completion(&mut car, DEFAULT_STEP_LIMIT))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_travel_policies, bench_rush_hour);
criterion_main!(benches);
