//! First-come-first-served dispatch.

use super::DispatchPolicy;
use crate::queue::RequestQueue;
use crate::request::Floor;

/// Strict arrival-order dispatch.
///
/// Requests are serviced in admission order, pickup before drop-off per
/// request: the target is always the floor of the lowest-id outstanding
/// leg (a waiting request's origin, an onboard rider's destination). On
/// reaching the target the car services every satisfiable request there
/// ("camping"), which keeps co-located requests from forcing extra round
/// trips; floors passed en route are never serviced.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Self {
        Self
    }

    fn head_floor(queue: &RequestQueue) -> Option<Floor> {
        queue.stops().min_by_key(|&(_, id)| id).map(|(floor, _)| floor)
    }
}

impl DispatchPolicy for Fcfs {
    fn name(&self) -> &str {
        "FCFS"
    }

    fn should_service(&self, queue: &RequestQueue, floor: Floor) -> bool {
        Self::head_floor(queue) == Some(floor)
    }

    fn next_target(&mut self, queue: &RequestQueue, _floor: Floor) -> Option<Floor> {
        Self::head_floor(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_with(requests: &[(Floor, Floor)]) -> RequestQueue {
        let mut queue = RequestQueue::new();
        for &(origin, destination) in requests {
            queue
                .admit(origin, destination, 10, 0)
                .expect("admission should succeed");
        }
        queue
    }

    #[test]
    fn test_head_is_lowest_id() {
        let queue = queue_with(&[(3, 7), (1, 5)]);
        let mut policy = Fcfs::new();
        assert_eq!(
            policy.next_target(&queue, 6),
            Some(3),
            "first admitted request sets the target"
        );
    }

    #[test]
    fn test_dropoff_precedes_later_pickup() {
        let mut queue = queue_with(&[(3, 7), (1, 5)]);
        queue.service_floor(3);
        let mut policy = Fcfs::new();
        assert_eq!(
            policy.next_target(&queue, 3),
            Some(7),
            "rider 0's drop-off outranks rider 1's pickup"
        );
    }

    #[test]
    fn test_no_service_away_from_head() {
        let mut queue = queue_with(&[(3, 7), (5, 9)]);
        queue.service_floor(3);
        let policy = Fcfs::new();
        assert!(
            !policy.should_service(&queue, 5),
            "floors passed en route stay unserviced"
        );
        assert!(policy.should_service(&queue, 7));
    }

    #[test]
    fn test_empty_queue_has_no_target() {
        let queue = RequestQueue::new();
        let mut policy = Fcfs::new();
        assert_eq!(policy.next_target(&queue, 1), None);
        assert!(!policy.should_service(&queue, 1));
    }
}
