//! Waiting/onboard request queues shared by the travel strategies.

use crate::request::{AdmissionError, Floor, RequestId, TravelRequest};
use crate::step::{ServiceEvent, ServiceKind};

/// Pickup and onboard queues for a single elevator.
///
/// Owns id allocation and admission validation. Insertion order is
/// preserved in both queues: `waiting` by admission order, `onboard` by
/// boarding order. A request lives in exactly one queue at a time and
/// moves waiting -> onboard -> destroyed.
#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    waiting: Vec<TravelRequest>,
    onboard: Vec<TravelRequest>,
    next_id: RequestId,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and admits a travel request, returning its id.
    ///
    /// `floors` is the building's top floor; `step` is the current step
    /// count, recorded on the request for age-based metrics. Rejection
    /// leaves the queue untouched.
    pub fn admit(
        &mut self,
        origin: Floor,
        destination: Floor,
        floors: Floor,
        step: u64,
    ) -> Result<RequestId, AdmissionError> {
        for floor in [origin, destination] {
            if floor < 1 || floor > floors {
                return Err(AdmissionError::FloorOutOfRange { floor, floors });
            }
        }
        if origin == destination {
            return Err(AdmissionError::SameFloor(origin));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.waiting.push(TravelRequest {
            id,
            origin,
            destination,
            arrival_step: step,
        });
        debug_assert!(self.check_integrity(), "queue integrity broken after admit");
        Ok(id)
    }

    /// Requests waiting for pickup, in admission order.
    pub fn waiting(&self) -> &[TravelRequest] {
        &self.waiting
    }

    /// Riders in the car, in boarding order.
    pub fn onboard(&self) -> &[TravelRequest] {
        &self.onboard
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    pub fn onboard_count(&self) -> usize {
        self.onboard.len()
    }

    /// True when no pickups and no drop-offs are pending.
    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty() && self.onboard.is_empty()
    }

    /// Every pending stop as `(floor, id)`: origins of waiting requests
    /// followed by destinations of onboard riders.
    pub fn stops(&self) -> impl Iterator<Item = (Floor, RequestId)> + '_ {
        self.waiting
            .iter()
            .map(|r| (r.origin, r.id))
            .chain(self.onboard.iter().map(|r| (r.destination, r.id)))
    }

    /// Whether any pending stop matches `floor`.
    pub fn has_stop_at(&self, floor: Floor) -> bool {
        self.stops().any(|(f, _)| f == floor)
    }

    /// Whether any pending stop lies strictly above `floor`.
    pub fn has_stop_above(&self, floor: Floor) -> bool {
        self.stops().any(|(f, _)| f > floor)
    }

    /// Whether any pending stop lies strictly below `floor`.
    pub fn has_stop_below(&self, floor: Floor) -> bool {
        self.stops().any(|(f, _)| f < floor)
    }

    /// Distinct floors with a pending stop, sorted ascending.
    pub fn outstanding_floors(&self) -> Vec<Floor> {
        let mut floors: Vec<Floor> = self.stops().map(|(f, _)| f).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// Services every request satisfiable at `floor`: all drop-offs in
    /// boarding order, then all pickups in admission order. Dropped
    /// riders are destroyed; picked-up riders move to the onboard queue.
    ///
    /// Returns the transitions performed, drop-offs first.
    pub fn service_floor(&mut self, floor: Floor) -> Vec<ServiceEvent> {
        let mut events = Vec::new();

        self.onboard.retain(|r| {
            if r.destination == floor {
                events.push(ServiceEvent {
                    id: r.id,
                    kind: ServiceKind::Dropoff,
                    floor,
                });
                false
            } else {
                true
            }
        });

        let mut still_waiting = Vec::with_capacity(self.waiting.len());
        for request in self.waiting.drain(..) {
            if request.origin == floor {
                events.push(ServiceEvent {
                    id: request.id,
                    kind: ServiceKind::Pickup,
                    floor,
                });
                self.onboard.push(request);
            } else {
                still_waiting.push(request);
            }
        }
        self.waiting = still_waiting;

        debug_assert!(
            self.check_integrity(),
            "queue integrity broken after service"
        );
        events
    }

    /// Empties both queues and rewinds the id allocator.
    pub fn clear(&mut self) {
        self.waiting.clear();
        self.onboard.clear();
        self.next_id = 0;
    }

    /// Structural invariant: no id is in both queues and every id was
    /// allocated. Meant for `debug_assert!`.
    pub fn check_integrity(&self) -> bool {
        let all_allocated = self
            .waiting
            .iter()
            .chain(&self.onboard)
            .all(|r| r.id < self.next_id);
        let disjoint = self
            .waiting
            .iter()
            .all(|w| self.onboard.iter().all(|o| o.id != w.id));
        all_allocated && disjoint
    }
}
