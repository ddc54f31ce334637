//! Floor, direction, and request primitives shared by all strategies.

use thiserror::Error;

/// Floor number. Valid floors for a building with `n` floors are `1..=n`.
pub type Floor = u8;

/// Identifier assigned to a request at admission.
///
/// Strictly increasing per elevator instance, so a smaller id always means
/// an earlier admission. Used for FIFO ordering and deterministic tie-breaks.
pub type RequestId = u64;

/// Travel direction of the car (or of a rider's intent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    /// No movement and no outstanding work.
    Idle,
}

impl Direction {
    /// The reverse direction. `Idle` stays `Idle`.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// Direction of travel from `from` toward `to` (`Idle` if equal).
    pub fn toward(from: Floor, to: Floor) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }
}

/// A pickup/drop-off journey: a rider at `origin` travelling to
/// `destination`.
///
/// Created by the elevator at admission; destroyed the tick the rider is
/// dropped off. `arrival_step` is the simulation step at which the request
/// was admitted, kept for age-based metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelRequest {
    pub id: RequestId,
    pub origin: Floor,
    pub destination: Floor,
    pub arrival_step: u64,
}

impl TravelRequest {
    /// Direction the rider wants to travel.
    pub fn direction(&self) -> Direction {
        Direction::toward(self.origin, self.destination)
    }
}

/// A hall call for the directional strategy: a floor plus an optional
/// direction hint.
///
/// `hint = None` means either direction is acceptable; the call then counts
/// toward both the up and down call sets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorCall {
    pub id: RequestId,
    pub floor: Floor,
    pub hint: Option<Direction>,
    pub arrival_step: u64,
}

impl FloorCall {
    /// Whether this call counts toward travel in `direction`.
    pub fn wants(&self, direction: Direction) -> bool {
        match self.hint {
            None => true,
            Some(h) => h == direction,
        }
    }
}

/// Why a request was rejected at admission.
///
/// Rejection never mutates elevator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// A floor lies outside the building's `1..=floors` range.
    #[error("floor {floor} out of range 1..={floors}")]
    FloorOutOfRange { floor: Floor, floors: Floor },

    /// Origin and destination are the same floor.
    #[error("origin and destination are both floor {0}")]
    SameFloor(Floor),

    /// A call hint was neither `Up` nor `Down`.
    #[error("call hint must be Up or Down")]
    BadHint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toward() {
        assert_eq!(Direction::toward(1, 5), Direction::Up);
        assert_eq!(Direction::toward(5, 1), Direction::Down);
        assert_eq!(Direction::toward(3, 3), Direction::Idle);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Idle.opposite(), Direction::Idle);
    }

    #[test]
    fn test_request_direction() {
        let req = TravelRequest {
            id: 0,
            origin: 2,
            destination: 9,
            arrival_step: 0,
        };
        assert_eq!(req.direction(), Direction::Up);
    }

    #[test]
    fn test_hintless_call_wants_both() {
        let call = FloorCall {
            id: 0,
            floor: 4,
            hint: None,
            arrival_step: 0,
        };
        assert!(call.wants(Direction::Up));
        assert!(call.wants(Direction::Down));
    }

    #[test]
    fn test_hinted_call_wants_one() {
        let call = FloorCall {
            id: 0,
            floor: 4,
            hint: Some(Direction::Down),
            arrival_step: 0,
        };
        assert!(!call.wants(Direction::Up));
        assert!(call.wants(Direction::Down));
    }

    #[test]
    fn test_admission_error_display() {
        let err = AdmissionError::FloorOutOfRange {
            floor: 12,
            floors: 10,
        };
        assert_eq!(err.to_string(), "floor 12 out of range 1..=10");
    }
}
