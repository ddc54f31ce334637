//! Shortest-seek-time-first dispatch.

use super::DispatchPolicy;
use crate::queue::RequestQueue;
use crate::request::Floor;

/// Greedy nearest-stop dispatch.
///
/// Each tick the car heads for the pending stop with the smallest
/// absolute distance from the current floor. Equidistant stops go to the
/// earliest admission: smallest request id across the waiting and onboard
/// queues. Continuity is ignored entirely, so a stream of nearby requests
/// can starve a distant one indefinitely; that behavior is intrinsic to
/// the policy and left intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl Sstf {
    pub fn new() -> Self {
        Self
    }
}

impl DispatchPolicy for Sstf {
    fn name(&self) -> &str {
        "SSTF"
    }

    fn should_service(&self, queue: &RequestQueue, floor: Floor) -> bool {
        queue.has_stop_at(floor)
    }

    fn next_target(&mut self, queue: &RequestQueue, floor: Floor) -> Option<Floor> {
        queue
            .stops()
            .min_by_key(|&(f, id)| (f.abs_diff(floor), id))
            .map(|(f, _)| f)
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
    fn test_picks_nearest() {
        let queue = queue_with(&[(1, 2), (9, 8), (6, 7)]);
        let mut policy = Sstf::new();
        assert_eq!(
            policy.next_target(&queue, 5),
            Some(6),
            "distance 1 beats distance 4"
        );
    }

    #[test]
    fn test_tie_breaks_by_admission_order() {
        let queue = queue_with(&[(7, 8), (3, 4)]);
        let mut policy = Sstf::new();
        // Floors 3 and 7 are both distance 2 from floor 5.
        assert_eq!(policy.next_target(&queue, 5), Some(7));

        let queue = queue_with(&[(3, 4), (7, 8)]);
        assert_eq!(policy.next_target(&queue, 5), Some(3));
    }

    #[test]
    fn test_tie_break_spans_both_queues() {
        let mut queue = queue_with(&[(5, 3), (7, 8)]);
        queue.service_floor(5);
        let mut policy = Sstf::new();
        // Onboard drop-off at 3 (id 0) ties with waiting pickup at 7 (id 1).
        assert_eq!(
            policy.next_target(&queue, 5),
            Some(3),
            "smaller id wins across queues"
        );
    }

    #[test]
    fn test_services_current_floor_matches() {
        let queue = queue_with(&[(4, 9)]);
        let policy = Sstf::new();
        assert!(policy.should_service(&queue, 4));
        assert!(!policy.should_service(&queue, 9), "nobody is onboard yet");
    }
}
