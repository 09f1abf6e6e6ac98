//! Interaction state
//!
//! - `PinState`: at most one active pin, last write wins
//! - `TravelParameters`: miles per day and day horizon driving the rings

use crate::config::defaults::{DEFAULT_MAX_DAYS, DEFAULT_MILES_PER_DAY};
use crate::constants::travel::*;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Whether a pin is currently placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinPhase {
    Empty,
    Set,
}

/// Holds the single active pin
#[derive(Debug, Clone, Default)]
pub struct PinState {
    pin: Option<GeoPoint>,
}

impl PinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pin, if any
    pub fn pin(&self) -> Option<GeoPoint> {
        self.pin
    }

    pub fn phase(&self) -> PinPhase {
        match self.pin {
            Some(_) => PinPhase::Set,
            None => PinPhase::Empty,
        }
    }

    /// Replace the pin unconditionally
    ///
    /// No range check: producers hand over points that are already valid.
    pub fn set_pin(&mut self, point: GeoPoint) {
        self.pin = Some(point);
    }

    /// Remove the pin. Clearing an empty state is a no-op.
    pub fn clear_pin(&mut self) {
        self.pin = None;
    }
}

/// Which travel parameter a control changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    MilesPerDay,
    MaxDays,
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MilesPerDay => write!(f, "miles_per_day"),
            Self::MaxDays => write!(f, "max_days"),
        }
    }
}

impl std::str::FromStr for Parameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "miles_per_day" | "miles-per-day" | "mpd" => Ok(Self::MilesPerDay),
            "max_days" | "max-days" | "days" => Ok(Self::MaxDays),
            _ => Err(format!("Unknown parameter: {}", s)),
        }
    }
}

/// Daily travel distance and number of days to draw
///
/// Setters store values as given. Producers run [`clamp_miles_per_day`] and
/// [`clamp_max_days`] first, the way a bounded slider would.
///
/// [`clamp_miles_per_day`]: TravelParameters::clamp_miles_per_day
/// [`clamp_max_days`]: TravelParameters::clamp_max_days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelParameters {
    miles_per_day: u32,
    max_days: u32,
}

impl TravelParameters {
    pub fn new(miles_per_day: u32, max_days: u32) -> Self {
        Self {
            miles_per_day,
            max_days,
        }
    }

    pub fn miles_per_day(&self) -> u32 {
        self.miles_per_day
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub fn set_miles_per_day(&mut self, value: u32) {
        self.miles_per_day = value;
    }

    pub fn set_max_days(&mut self, value: u32) {
        self.max_days = value;
    }

    /// Clamp to `[100, 600]` and snap to the 25-mile slider step
    pub fn clamp_miles_per_day(value: u32) -> u32 {
        let clamped = value.clamp(MIN_MILES_PER_DAY, MAX_MILES_PER_DAY);
        let steps = (clamped - MIN_MILES_PER_DAY + MILES_PER_DAY_STEP / 2) / MILES_PER_DAY_STEP;
        MIN_MILES_PER_DAY + steps * MILES_PER_DAY_STEP
    }

    /// Clamp to `[1, 7]`
    pub fn clamp_max_days(value: u32) -> u32 {
        value.clamp(MIN_DAYS, MAX_DAYS)
    }
}

impl Default for TravelParameters {
    fn default() -> Self {
        Self::new(DEFAULT_MILES_PER_DAY, DEFAULT_MAX_DAYS)
    }
}
