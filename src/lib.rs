//! Elevator dispatch-policy simulation engine.
//!
//! Four scheduling strategies drive a single car over discrete time,
//! all exposing the same admit/step/reset contract so they can be run
//! and measured side by side:
//!
//! - **FCFS**: strict admission order, pickup before drop-off per
//!   request, camping on shared floors.
//! - **SCAN**: monotonic sweep that services every stop it reaches and
//!   reverses only when nothing lies ahead.
//! - **SSTF**: greedy nearest-stop selection with a fixed
//!   distance-then-id tie-break; starves distant requests by design.
//! - **Rush-Hour**: hall calls with direction hints, served by a
//!   persistent sweep that clears floors on arrival.
//!
//! One `step()` advances exactly one tick: the car idles, moves exactly
//! one floor, or services its current floor, reported as a
//! [`StepResult`]. The [`sim`] helpers replay timed scenarios and
//! compare policies; a [`MetricsCollector`] turns results into wait and
//! travel figures.
//!
//! # Examples
//!
//! ```
//! use liftsim::{compare, ElevatorConfig, TimedRequest, DEFAULT_STEP_LIMIT};
//!
//! let scenario = [
//!     TimedRequest::new(0, 1, 7),
//!     TimedRequest::new(3, 4, 2),
//! ];
//! let reports = compare(&ElevatorConfig::default(), &scenario, DEFAULT_STEP_LIMIT);
//! assert_eq!(reports.len(), 3);
//! assert!(reports.iter().all(|r| r.summary.served == 2));
//! ```

pub mod config;
pub mod directional;
pub mod elevator;
pub mod metrics;
pub mod policy;
pub mod queue;
pub mod request;
pub mod sim;
pub mod step;

pub use config::ElevatorConfig;
pub use directional::DirectionalElevator;
pub use elevator::{Elevator, TravelElevator};
pub use metrics::{Journey, MetricsCollector, MetricsSummary};
pub use policy::{DispatchPolicy, Fcfs, Scan, Sstf};
pub use queue::RequestQueue;
pub use request::{AdmissionError, Direction, Floor, FloorCall, RequestId, TravelRequest};
pub use sim::{
    compare, run_scenario, run_to_completion, StrategyReport, TimedRequest, DEFAULT_STEP_LIMIT,
};
pub use step::{Action, ServiceEvent, ServiceKind, StepResult};
