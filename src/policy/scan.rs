//! SCAN (sweep) dispatch.

use super::DispatchPolicy;
use crate::queue::RequestQueue;
use crate::request::{Direction, Floor};

/// Monotonic sweep dispatch.
///
/// The car keeps travelling in its sweep direction, stopping wherever a
/// pending stop matches the current floor, and reverses only when no stop
/// lies strictly ahead. Boundary floors reverse the sweep the same way:
/// nothing lies beyond floor `1` or the top floor. The sweep starts
/// upward and survives empty periods, so a car that went idle resumes
/// its old orientation.
#[derive(Debug, Clone, Copy)]
pub struct Scan {
    sweep: Direction,
}

impl Scan {
    pub fn new() -> Self {
        Self {
            sweep: Direction::Up,
        }
    }

    /// Nearest stop strictly ahead in the sweep direction.
    fn target_ahead(&self, queue: &RequestQueue, floor: Floor) -> Option<Floor> {
        let stops = queue.stops().map(|(f, _)| f);
        match self.sweep {
            Direction::Up => stops.filter(|&f| f > floor).min(),
            Direction::Down => stops.filter(|&f| f < floor).max(),
            Direction::Idle => None,
        }
    }
}

impl Default for Scan {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchPolicy for Scan {
    fn name(&self) -> &str {
        "SCAN"
    }

    fn should_service(&self, queue: &RequestQueue, floor: Floor) -> bool {
        queue.has_stop_at(floor)
    }

    fn next_target(&mut self, queue: &RequestQueue, floor: Floor) -> Option<Floor> {
        if queue.is_empty() {
            return None;
        }
        match self.target_ahead(queue, floor) {
            Some(target) => Some(target),
            None => {
                // Nothing ahead; reverse within the same tick.
                self.sweep = self.sweep.opposite();
                self.target_ahead(queue, floor)
            }
        }
    }

    fn reset(&mut self) {
        self.sweep = Direction::Up;
    }
}
