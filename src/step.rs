//! Per-tick step results shared by every strategy.

use crate::request::{Direction, Floor, RequestId};

/// What the car did during one tick.
///
/// Exactly one of the three happens per tick: the car moves one floor,
/// services the current floor without moving, or idles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// No outstanding work. Repeated idle ticks change nothing but the
    /// step counter.
    Idle,

    /// Moved exactly one floor in `direction`, heading for `target`.
    /// Increments the total-move counter.
    Moving { direction: Direction, target: Floor },

    /// Stayed put and serviced one or more requests at the current floor.
    Serviced,
}

/// The kind of transition a service event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServiceKind {
    /// A waiting rider boarded at their origin floor.
    Pickup,
    /// An onboard rider exited at their destination floor.
    Dropoff,
    /// A hall call was cleared by arriving at its floor.
    Call,
}

/// One request transition performed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceEvent {
    pub id: RequestId,
    pub kind: ServiceKind,
    pub floor: Floor,
}

/// The outcome of one `step()` call.
///
/// `events` lists every request transition performed this tick, drop-offs
/// before pickups. For the travel strategies it is non-empty exactly when
/// `action` is [`Action::Serviced`]; the directional strategy also clears
/// calls within a `Moving` tick when the move arrives at an outstanding
/// floor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepResult {
    /// Step counter after this tick; 1 for the first tick after
    /// construction or reset.
    pub step: u64,

    /// Car position after this tick.
    pub floor: Floor,

    /// Reported travel direction: `Idle` when no work is outstanding,
    /// otherwise the strategy's current travel or sweep direction.
    pub direction: Direction,

    pub action: Action,

    pub events: Vec<ServiceEvent>,

    /// Requests still waiting for pickup (outstanding calls for the
    /// directional strategy).
    pub waiting: usize,

    /// Riders currently in the car (always 0 for the directional strategy).
    pub onboard: usize,
}

impl StepResult {
    /// Whether any request was serviced this tick.
    pub fn served(&self) -> bool {
        !self.events.is_empty()
    }

    /// Whether the car changed floors this tick.
    pub fn moved(&self) -> bool {
        matches!(self.action, Action::Moving { .. })
    }
}
