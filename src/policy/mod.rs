//! Interchangeable dispatch policies for the travel elevator.
//!
//! A policy answers two questions: should the car service the floor it is
//! standing on this tick, and which floor should it head for next. The
//! [`TravelElevator`](crate::elevator::TravelElevator) owns the queues,
//! movement, and counters, so a policy holds at most its sweep state.

mod fcfs;
mod scan;
mod sstf;

pub use fcfs::Fcfs;
pub use scan::Scan;
pub use sstf::Sstf;

use crate::queue::RequestQueue;
use crate::request::Floor;

/// A target-selection strategy driven by the travel elevator.
pub trait DispatchPolicy {
    /// Policy name used in reports and logs.
    fn name(&self) -> &str;

    /// Whether the car should stop and service `floor` this tick.
    fn should_service(&self, queue: &RequestQueue, floor: Floor) -> bool;

    /// The floor the car should head toward.
    ///
    /// Only called when `should_service` returned false for `floor`.
    /// Returns `None` when the queue holds no work. May update internal
    /// sweep state ([`Scan`] reverses here).
    fn next_target(&mut self, queue: &RequestQueue, floor: Floor) -> Option<Floor>;

    /// Restores construction-time state.
    fn reset(&mut self) {}
}
