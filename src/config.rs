//! Building/elevator configuration.

use crate::request::Floor;

/// Configuration shared by every strategy.
///
/// # Examples
///
/// ```
/// use liftsim::ElevatorConfig;
///
/// let config = ElevatorConfig::default()
///     .with_floors(16)
///     .with_initial_floor(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorConfig {
    /// Top floor of the building. Valid floors are `1..=floors`.
    pub floors: Floor,

    /// Floor the car starts on, and returns to after `reset()`.
    pub initial_floor: Floor,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self {
            floors: 10,
            initial_floor: 1,
        }
    }
}

impl ElevatorConfig {
    pub fn with_floors(mut self, floors: Floor) -> Self {
        self.floors = floors;
        self
    }

    pub fn with_initial_floor(mut self, floor: Floor) -> Self {
        self.initial_floor = floor;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.floors < 2 {
            return Err("floors must be at least 2".into());
        }
        if self.initial_floor < 1 || self.initial_floor > self.floors {
            return Err(format!(
                "initial_floor must be in 1..={}, got {}",
                self.floors, self.initial_floor
            ));
        }
        Ok(())
    }
}
