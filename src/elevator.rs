//! The travel elevator: one car driven by an interchangeable dispatch
//! policy.

use log::warn;

use crate::config::ElevatorConfig;
use crate::policy::{DispatchPolicy, Fcfs, Scan, Sstf};
use crate::queue::RequestQueue;
use crate::request::{AdmissionError, Direction, Floor, RequestId, TravelRequest};
use crate::step::{Action, ServiceEvent, StepResult};

/// The step contract shared by every strategy.
///
/// One `step()` call advances simulated time by exactly one tick: the car
/// idles, moves exactly one floor, or services its current floor. State
/// is only ever changed by `step()`, admission, and `reset()`.
pub trait Elevator {
    /// Advances one tick and reports what happened.
    fn step(&mut self) -> StepResult;

    /// Restores the freshly-constructed state, id allocation included.
    fn reset(&mut self);

    fn current_floor(&self) -> Floor;

    /// `Idle` when no work is outstanding, otherwise the current travel
    /// or sweep direction.
    fn direction(&self) -> Direction;

    /// Ticks elapsed since construction or the last reset.
    fn step_count(&self) -> u64;

    /// One-floor moves performed. Stationary ticks never count.
    fn total_moves(&self) -> u64;

    /// Requests awaiting pickup (outstanding calls for the directional
    /// strategy).
    fn waiting_count(&self) -> usize;

    /// Riders in the car (always 0 for the directional strategy).
    fn onboard_count(&self) -> usize;

    /// Strategy name for reports and logs.
    fn name(&self) -> &str;

    /// True when no request is waiting and nobody is onboard.
    fn is_idle(&self) -> bool {
        self.waiting_count() == 0 && self.onboard_count() == 0
    }
}

/// A single car serving origin-to-destination requests under a
/// [`DispatchPolicy`].
///
/// The machine owns the queues, position, and counters; the policy only
/// picks targets. Swapping the policy is the whole difference between
/// FCFS, SCAN, and SSTF service.
///
/// # Examples
///
/// ```
/// use liftsim::{Elevator, ElevatorConfig, TravelElevator};
///
/// let mut car = TravelElevator::sstf(ElevatorConfig::default());
/// assert!(car.add_request(3, 7));
/// let result = car.step();
/// assert_eq!(result.floor, 2);
/// ```
pub struct TravelElevator {
    config: ElevatorConfig,
    policy: Box<dyn DispatchPolicy>,
    queue: RequestQueue,
    floor: Floor,
    direction: Direction,
    step_count: u64,
    total_moves: u64,
}

impl TravelElevator {
    /// Creates a car with an explicit policy.
    ///
    /// Panics if `config` is invalid.
    pub fn new(config: ElevatorConfig, policy: Box<dyn DispatchPolicy>) -> Self {
        config.validate().expect("invalid ElevatorConfig");
        Self {
            floor: config.initial_floor,
            direction: Direction::Idle,
            queue: RequestQueue::new(),
            policy,
            config,
            step_count: 0,
            total_moves: 0,
        }
    }

    /// First-come-first-served car.
    pub fn fcfs(config: ElevatorConfig) -> Self {
        Self::new(config, Box::new(Fcfs::new()))
    }

    /// Sweeping (SCAN) car.
    pub fn scan(config: ElevatorConfig) -> Self {
        Self::new(config, Box::new(Scan::new()))
    }

    /// Shortest-seek-time-first car.
    pub fn sstf(config: ElevatorConfig) -> Self {
        Self::new(config, Box::new(Sstf::new()))
    }

    pub fn config(&self) -> &ElevatorConfig {
        &self.config
    }

    /// Top floor of the building.
    pub fn floors(&self) -> Floor {
        self.config.floors
    }

    /// Floor the car starts on and returns to after `reset()`.
    pub fn initial_floor(&self) -> Floor {
        self.config.initial_floor
    }

    /// Admits a request, returning its id.
    ///
    /// Rejection leaves the car untouched.
    pub fn try_add_request(
        &mut self,
        origin: Floor,
        destination: Floor,
    ) -> Result<RequestId, AdmissionError> {
        self.queue
            .admit(origin, destination, self.config.floors, self.step_count)
    }

    /// Admits a request; false on rejection (logged, no mutation).
    pub fn add_request(&mut self, origin: Floor, destination: Floor) -> bool {
        match self.try_add_request(origin, destination) {
            Ok(_) => true,
            Err(err) => {
                warn!("rejected request {origin} -> {destination}: {err}");
                false
            }
        }
    }

    /// Requests waiting for pickup, in admission order.
    pub fn waiting(&self) -> &[TravelRequest] {
        self.queue.waiting()
    }

    /// Riders in the car, in boarding order.
    pub fn onboard(&self) -> &[TravelRequest] {
        self.queue.onboard()
    }

    /// Distinct floors the car still has to visit, sorted ascending.
    pub fn outstanding_floors(&self) -> Vec<Floor> {
        self.queue.outstanding_floors()
    }

    fn result(&self, action: Action, events: Vec<ServiceEvent>) -> StepResult {
        StepResult {
            step: self.step_count,
            floor: self.floor,
            direction: self.direction,
            action,
            events,
            waiting: self.queue.waiting_count(),
            onboard: self.queue.onboard_count(),
        }
    }
}

impl Elevator for TravelElevator {
    fn step(&mut self) -> StepResult {
        self.step_count += 1;

        if self.queue.is_empty() {
            self.direction = Direction::Idle;
            return self.result(Action::Idle, Vec::new());
        }

        if self.policy.should_service(&self.queue, self.floor) {
            let events = self.queue.service_floor(self.floor);
            debug_assert!(!events.is_empty(), "service requested with no match");
            if self.queue.is_empty() {
                self.direction = Direction::Idle;
            }
            return self.result(Action::Serviced, events);
        }

        match self.policy.next_target(&self.queue, self.floor) {
            Some(target) if target != self.floor => {
                let direction = Direction::toward(self.floor, target);
                self.floor = if target > self.floor {
                    self.floor + 1
                } else {
                    self.floor - 1
                };
                self.direction = direction;
                self.total_moves += 1;
                self.result(Action::Moving { direction, target }, Vec::new())
            }
            _ => {
                // A policy with pending work always names a reachable
                // target; anything else counts as an idle tick.
                self.direction = Direction::Idle;
                self.result(Action::Idle, Vec::new())
            }
        }
    }

    fn reset(&mut self) {
        self.floor = self.config.initial_floor;
        self.direction = Direction::Idle;
        self.queue.clear();
        self.policy.reset();
        self.step_count = 0;
        self.total_moves = 0;
    }

    fn current_floor(&self) -> Floor {
        self.floor
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn step_count(&self) -> u64 {
        self.step_count
    }

    fn total_moves(&self) -> u64 {
        self.total_moves
    }

    fn waiting_count(&self) -> usize {
        self.queue.waiting_count()
    }

    fn onboard_count(&self) -> usize {
        self.queue.onboard_count()
    }

    fn name(&self) -> &str {
        self.policy.name()
    }
}
