//! Rush-hour directional dispatch over hall calls.

use log::warn;

use crate::config::ElevatorConfig;
use crate::elevator::Elevator;
use crate::request::{AdmissionError, Direction, Floor, FloorCall, RequestId};
use crate::step::{Action, ServiceEvent, ServiceKind, StepResult};

/// A car serving floor calls with optional direction hints.
///
/// Outstanding calls are viewed three ways: all floors, up-tagged floors,
/// and down-tagged floors, with a hintless call counting as both. Each
/// tick the car re-picks its target: the nearest tagged floor strictly
/// ahead in the sweep direction; failing that it looks strictly ahead in
/// the opposite direction, reversing the sweep only when that turn
/// yields a floor; failing that it falls back to the smallest
/// outstanding floor, earliest call first, leaving the sweep untouched.
/// The fallback keeps the car live when every remaining call is tagged
/// against its position (an up-call below, say). Arriving at any
/// outstanding floor clears every call there in that same tick, even
/// mid-route.
///
/// The reported direction is the sweep, which can differ from the
/// physical motion while the car crawls to a fallback floor behind it.
///
/// # Examples
///
/// ```
/// use liftsim::{Direction, DirectionalElevator, Elevator, ElevatorConfig};
///
/// let mut car = DirectionalElevator::new(ElevatorConfig::default());
/// assert!(car.add_call(4, Some(Direction::Up)));
/// while !car.is_idle() {
///     car.step();
/// }
/// assert_eq!(car.current_floor(), 4);
/// ```
pub struct DirectionalElevator {
    config: ElevatorConfig,
    calls: Vec<FloorCall>,
    sweep: Direction,
    floor: Floor,
    next_id: RequestId,
    step_count: u64,
    total_moves: u64,
}

impl DirectionalElevator {
    /// Panics if `config` is invalid.
    pub fn new(config: ElevatorConfig) -> Self {
        config.validate().expect("invalid ElevatorConfig");
        Self {
            floor: config.initial_floor,
            sweep: Direction::Up,
            calls: Vec::new(),
            next_id: 0,
            step_count: 0,
            total_moves: 0,
            config,
        }
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

    /// Admits a call, returning its id.
    ///
    /// The hint must be `Up`, `Down`, or `None` (either direction).
    /// Rejection leaves the car untouched.
    pub fn try_add_call(
        &mut self,
        floor: Floor,
        hint: Option<Direction>,
    ) -> Result<RequestId, AdmissionError> {
        if floor < 1 || floor > self.config.floors {
            return Err(AdmissionError::FloorOutOfRange {
                floor,
                floors: self.config.floors,
            });
        }
        if hint == Some(Direction::Idle) {
            return Err(AdmissionError::BadHint);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.calls.push(FloorCall {
            id,
            floor,
            hint,
            arrival_step: self.step_count,
        });
        Ok(id)
    }

    /// Admits a call; false on rejection (logged, no mutation).
    pub fn add_call(&mut self, floor: Floor, hint: Option<Direction>) -> bool {
        match self.try_add_call(floor, hint) {
            Ok(_) => true,
            Err(err) => {
                warn!("rejected call at floor {floor}: {err}");
                false
            }
        }
    }

    /// Outstanding calls in admission order.
    pub fn calls(&self) -> &[FloorCall] {
        &self.calls
    }

    /// Distinct floors with an outstanding call, sorted ascending.
    pub fn outstanding_floors(&self) -> Vec<Floor> {
        let mut floors: Vec<Floor> = self.calls.iter().map(|c| c.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// Distinct floors with a call counting toward upward travel.
    pub fn up_floors(&self) -> Vec<Floor> {
        self.view(Direction::Up)
    }

    /// Distinct floors with a call counting toward downward travel.
    pub fn down_floors(&self) -> Vec<Floor> {
        self.view(Direction::Down)
    }

    fn view(&self, direction: Direction) -> Vec<Floor> {
        let mut floors: Vec<Floor> = self.tagged_floors(direction).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    fn tagged_floors(&self, direction: Direction) -> impl Iterator<Item = Floor> + '_ {
        self.calls
            .iter()
            .filter(move |c| c.wants(direction))
            .map(|c| c.floor)
    }

    /// Nearest tagged floor strictly ahead of the car for `sweep`.
    fn tagged_ahead(&self, sweep: Direction) -> Option<Floor> {
        match sweep {
            Direction::Up => self
                .tagged_floors(Direction::Up)
                .filter(|&f| f > self.floor)
                .min(),
            Direction::Down => self
                .tagged_floors(Direction::Down)
                .filter(|&f| f < self.floor)
                .max(),
            Direction::Idle => None,
        }
    }

    /// Picks the tick's target floor, reversing the sweep when the
    /// current direction is exhausted and work waits ahead the other way.
    fn next_call_floor(&mut self) -> Option<Floor> {
        if self.calls.is_empty() {
            return None;
        }

        if let Some(target) = self.tagged_ahead(self.sweep) {
            return Some(target);
        }

        // The sweep reverses only when the turn yields a target floor
        // ahead; an opposite-tagged floor behind the car is reached
        // through the fallback with the sweep untouched, so one
        // exhaustion event flips the sweep at most once.
        let opposite = self.sweep.opposite();
        if let Some(target) = self.tagged_ahead(opposite) {
            self.sweep = opposite;
            return Some(target);
        }

        // No tagged floor ahead in either direction: smallest floor
        // wins, earliest call first.
        self.calls
            .iter()
            .map(|c| (c.floor, c.id))
            .min()
            .map(|(floor, _)| floor)
    }

    /// Clears every call at `floor`, in admission order.
    fn clear_floor(&mut self, floor: Floor) -> Vec<ServiceEvent> {
        let mut events = Vec::new();
        self.calls.retain(|call| {
            if call.floor == floor {
                events.push(ServiceEvent {
                    id: call.id,
                    kind: ServiceKind::Call,
                    floor,
                });
                false
            } else {
                true
            }
        });
        events
    }

    fn result(&self, action: Action, events: Vec<ServiceEvent>) -> StepResult {
        StepResult {
            step: self.step_count,
            floor: self.floor,
            direction: self.direction(),
            action,
            events,
            waiting: self.calls.len(),
            onboard: 0,
        }
    }
}

impl Elevator for DirectionalElevator {
    fn step(&mut self) -> StepResult {
        self.step_count += 1;

        let Some(target) = self.next_call_floor() else {
            return self.result(Action::Idle, Vec::new());
        };

        if target == self.floor {
            let events = self.clear_floor(self.floor);
            debug_assert!(!events.is_empty(), "stationary target with no call");
            return self.result(Action::Serviced, events);
        }

        let direction = Direction::toward(self.floor, target);
        self.floor = if target > self.floor {
            self.floor + 1
        } else {
            self.floor - 1
        };
        self.total_moves += 1;
        // Serve on arrival: an outstanding floor reached mid-route is
        // cleared in the same tick.
        let events = self.clear_floor(self.floor);
        self.result(Action::Moving { direction, target }, events)
    }

    fn reset(&mut self) {
        self.floor = self.config.initial_floor;
        self.sweep = Direction::Up;
        self.calls.clear();
        self.next_id = 0;
        self.step_count = 0;
        self.total_moves = 0;
    }

    fn current_floor(&self) -> Floor {
        self.floor
    }

    /// `Idle` with no outstanding calls, otherwise the sweep direction.
    fn direction(&self) -> Direction {
        if self.calls.is_empty() {
            Direction::Idle
        } else {
            self.sweep
        }
    }

    fn step_count(&self) -> u64 {
        self.step_count
    }

    fn total_moves(&self) -> u64 {
        self.total_moves
    }

    fn waiting_count(&self) -> usize {
        self.calls.len()
    }

    fn onboard_count(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "RushHour"
    }
}
