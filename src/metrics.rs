//! Journey metrics derived from admissions and step results.

use std::collections::BTreeMap;

use crate::request::{Floor, RequestId};
use crate::step::{ServiceKind, StepResult};

/// Timing record for a single request.
///
/// A travel request fills `pickup` when the rider boards and `dropoff`
/// when they exit; a cleared hall call fills both with its clearing step,
/// so its wait equals its journey and its travel time is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Journey {
    pub id: RequestId,
    pub admitted_step: u64,
    pub pickup_step: Option<u64>,
    pub pickup_floor: Option<Floor>,
    pub dropoff_step: Option<u64>,
    pub dropoff_floor: Option<Floor>,
}

impl Journey {
    fn new(id: RequestId, admitted_step: u64) -> Self {
        Self {
            id,
            admitted_step,
            pickup_step: None,
            pickup_floor: None,
            dropoff_step: None,
            dropoff_floor: None,
        }
    }

    /// Steps from admission to boarding (or call clearance).
    pub fn wait_time(&self) -> Option<u64> {
        self.pickup_step.map(|s| s - self.admitted_step)
    }

    /// Steps spent onboard.
    pub fn travel_time(&self) -> Option<u64> {
        match (self.pickup_step, self.dropoff_step) {
            (Some(pickup), Some(dropoff)) => Some(dropoff - pickup),
            _ => None,
        }
    }

    /// Steps from admission to completion.
    pub fn journey_time(&self) -> Option<u64> {
        self.dropoff_step.map(|s| s - self.admitted_step)
    }

    pub fn completed(&self) -> bool {
        self.dropoff_step.is_some()
    }
}

/// Aggregate figures over every completed journey.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSummary {
    /// Requests fully serviced.
    pub served: usize,
    /// Mean wait (admission to pickup), 0 with nothing served.
    pub avg_wait: f64,
    /// Worst wait seen.
    pub max_wait: u64,
    /// Mean onboard time.
    pub avg_travel: f64,
    /// Mean admission-to-completion time.
    pub avg_journey: f64,
    /// One-floor moves observed.
    pub total_moves: u64,
    /// Last step observed.
    pub steps: u64,
}

/// Observes admissions and step results and derives per-request and
/// aggregate timings.
///
/// The collector is strategy-agnostic: it keys everything by request id
/// and reads transitions from [`StepResult::events`], so one collector
/// works for travel cars and the directional car alike.
///
/// # Examples
///
/// ```
/// use liftsim::{Elevator, ElevatorConfig, MetricsCollector, TravelElevator};
///
/// let mut car = TravelElevator::scan(ElevatorConfig::default());
/// let mut metrics = MetricsCollector::new();
/// let id = car.try_add_request(2, 6).expect("valid request");
/// metrics.record_admission(id, car.step_count());
/// while !car.is_idle() {
///     metrics.record_step(&car.step());
/// }
/// assert_eq!(metrics.summary().served, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    journeys: BTreeMap<RequestId, Journey>,
    moves: u64,
    steps: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an admitted request at the given step count.
    pub fn record_admission(&mut self, id: RequestId, step: u64) {
        self.journeys.insert(id, Journey::new(id, step));
    }

    /// Folds one tick's outcome into the collector.
    ///
    /// Events for ids that were never registered count as admitted on
    /// their service step.
    pub fn record_step(&mut self, result: &StepResult) {
        self.steps = self.steps.max(result.step);
        if result.moved() {
            self.moves += 1;
        }

        for event in &result.events {
            let journey = self
                .journeys
                .entry(event.id)
                .or_insert_with(|| Journey::new(event.id, result.step));
            match event.kind {
                ServiceKind::Pickup => {
                    journey.pickup_step = Some(result.step);
                    journey.pickup_floor = Some(event.floor);
                }
                ServiceKind::Dropoff => {
                    journey.dropoff_step = Some(result.step);
                    journey.dropoff_floor = Some(event.floor);
                }
                ServiceKind::Call => {
                    journey.pickup_step = Some(result.step);
                    journey.pickup_floor = Some(event.floor);
                    journey.dropoff_step = Some(result.step);
                    journey.dropoff_floor = Some(event.floor);
                }
            }
        }
    }

    /// Per-request records in admission order.
    pub fn journeys(&self) -> impl Iterator<Item = &Journey> + '_ {
        self.journeys.values()
    }

    /// Completed journeys so far.
    pub fn served(&self) -> usize {
        self.journeys.values().filter(|j| j.completed()).count()
    }

    /// Aggregates the completed journeys.
    pub fn summary(&self) -> MetricsSummary {
        let completed: Vec<&Journey> = self.journeys.values().filter(|j| j.completed()).collect();

        let mean = |total: u64| {
            if completed.is_empty() {
                0.0
            } else {
                total as f64 / completed.len() as f64
            }
        };

        let wait_total: u64 = completed.iter().filter_map(|j| j.wait_time()).sum();
        let travel_total: u64 = completed.iter().filter_map(|j| j.travel_time()).sum();
        let journey_total: u64 = completed.iter().filter_map(|j| j.journey_time()).sum();
        let max_wait = completed
            .iter()
            .filter_map(|j| j.wait_time())
            .max()
            .unwrap_or(0);

        MetricsSummary {
            served: completed.len(),
            avg_wait: mean(wait_total),
            max_wait,
            avg_travel: mean(travel_total),
            avg_journey: mean(journey_total),
            total_moves: self.moves,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ElevatorConfig;
    use crate::directional::DirectionalElevator;
    use crate::elevator::{Elevator, TravelElevator};
    use crate::request::Direction;

    fn observe(car: &mut dyn Elevator, metrics: &mut MetricsCollector, limit: u64) {
        while !car.is_idle() && car.step_count() < limit {
            metrics.record_step(&car.step());
        }
    }

    #[test]
    fn test_fcfs_journey_timings() {
        let mut car = TravelElevator::fcfs(ElevatorConfig::default());
        let mut metrics = MetricsCollector::new();
        for (origin, destination) in [(3, 7), (1, 5)] {
            let id = car.try_add_request(origin, destination).expect("valid");
            metrics.record_admission(id, car.step_count());
        }
        observe(&mut car, &mut metrics, 100);

        let journeys: Vec<&Journey> = metrics.journeys().collect();
        assert_eq!(journeys[0].wait_time(), Some(3));
        assert_eq!(journeys[0].travel_time(), Some(5));
        assert_eq!(journeys[0].journey_time(), Some(8));
        assert_eq!(journeys[1].wait_time(), Some(15));
        assert_eq!(journeys[1].journey_time(), Some(20));

        let summary = metrics.summary();
        assert_eq!(summary.served, 2);
        assert!((summary.avg_wait - 9.0).abs() < 1e-10);
        assert_eq!(summary.max_wait, 15);
        assert!((summary.avg_travel - 5.0).abs() < 1e-10);
        assert!((summary.avg_journey - 14.0).abs() < 1e-10);
        assert_eq!(summary.total_moves, 16);
        assert_eq!(summary.steps, 20);
    }

    #[test]
    fn test_call_wait_equals_journey() {
        let mut car = DirectionalElevator::new(ElevatorConfig::default());
        let mut metrics = MetricsCollector::new();
        let id = car.try_add_call(3, Some(Direction::Up)).expect("valid");
        metrics.record_admission(id, car.step_count());
        observe(&mut car, &mut metrics, 100);

        let summary = metrics.summary();
        assert_eq!(summary.served, 1);
        assert!((summary.avg_wait - 2.0).abs() < 1e-10);
        assert!((summary.avg_travel - 0.0).abs() < 1e-10);
        assert!((summary.avg_journey - 2.0).abs() < 1e-10);
        assert_eq!(summary.total_moves, 2);
    }

    #[test]
    fn test_unserved_requests_stay_out_of_aggregates() {
        let mut metrics = MetricsCollector::new();
        metrics.record_admission(0, 0);
        let summary = metrics.summary();
        assert_eq!(summary.served, 0);
        assert!((summary.avg_wait - 0.0).abs() < 1e-10);
        assert_eq!(summary.max_wait, 0);
        assert_eq!(metrics.journeys().count(), 1);
        assert!(!metrics.journeys().next().expect("present").completed());
    }
}
