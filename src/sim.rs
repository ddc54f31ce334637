//! Run helpers: drain a car, replay timed scenarios, compare policies.

use log::{debug, warn};

use crate::config::ElevatorConfig;
use crate::elevator::{Elevator, TravelElevator};
use crate::metrics::{MetricsCollector, MetricsSummary};
use crate::request::Floor;
use crate::step::StepResult;

/// Conventional step ceiling for [`run_to_completion`] and
/// [`run_scenario`].
pub const DEFAULT_STEP_LIMIT: u64 = 10_000;

/// Steps `elevator` until it drains or `max_steps` ticks have run,
/// returning every tick result.
///
/// The ceiling guards against undrainable queues; hitting it logs a
/// warning and returns whatever ran.
pub fn run_to_completion(elevator: &mut dyn Elevator, max_steps: u64) -> Vec<StepResult> {
    let mut results = Vec::new();
    while !elevator.is_idle() {
        if results.len() as u64 >= max_steps {
            warn!(
                "{} not drained after {max_steps} steps, giving up",
                elevator.name()
            );
            break;
        }
        results.push(elevator.step());
    }
    results
}

/// A travel request scheduled for a future step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedRequest {
    /// Step count at which the request is admitted.
    pub at_step: u64,
    pub origin: Floor,
    pub destination: Floor,
}

impl TimedRequest {
    pub fn new(at_step: u64, origin: Floor, destination: Floor) -> Self {
        Self {
            at_step,
            origin,
            destination,
        }
    }
}

/// Replays a timed scenario on one car and collects its metrics.
///
/// Each request is admitted as soon as the car's step counter reaches
/// `at_step` (pass a fresh or reset car; the counter is absolute), then
/// the car runs until drained, subject to `max_steps`. Invalid requests
/// are skipped with a warning.
pub fn run_scenario(
    car: &mut TravelElevator,
    scenario: &[TimedRequest],
    max_steps: u64,
) -> MetricsCollector {
    let mut metrics = MetricsCollector::new();
    let mut ordered = scenario.to_vec();
    ordered.sort_by_key(|r| r.at_step);
    let mut pending = ordered.into_iter().peekable();

    loop {
        while pending
            .peek()
            .is_some_and(|r| r.at_step <= car.step_count())
        {
            let request = pending.next().expect("peeked");
            match car.try_add_request(request.origin, request.destination) {
                Ok(id) => {
                    debug!(
                        "admitted request {id} ({} -> {}) at step {}",
                        request.origin,
                        request.destination,
                        car.step_count()
                    );
                    metrics.record_admission(id, car.step_count());
                }
                Err(err) => warn!(
                    "skipping scenario request at step {}: {err}",
                    request.at_step
                ),
            }
        }

        if car.is_idle() && pending.peek().is_none() {
            break;
        }
        if car.step_count() >= max_steps {
            warn!(
                "{} scenario not drained after {max_steps} steps, giving up",
                car.name()
            );
            break;
        }
        metrics.record_step(&car.step());
    }

    metrics
}

/// Metrics for one policy over a shared scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyReport {
    pub name: String,
    pub summary: MetricsSummary,
}

/// Runs the same timed scenario on FCFS, SCAN, and SSTF cars and
/// reports each policy's metrics side by side.
///
/// The directional car is excluded: hall calls carry no destination, so
/// a travel scenario does not translate to it.
pub fn compare(
    config: &ElevatorConfig,
    scenario: &[TimedRequest],
    max_steps: u64,
) -> Vec<StrategyReport> {
    [
        TravelElevator::fcfs(config.clone()),
        TravelElevator::scan(config.clone()),
        TravelElevator::sstf(config.clone()),
    ]
    .into_iter()
    .map(|mut car| {
        let metrics = run_scenario(&mut car, scenario, max_steps);
        StrategyReport {
            name: car.name().to_string(),
            summary: metrics.summary(),
        }
    })
    .collect()
}
