//! Interaction coordinator
//!
//! Glue between the pin, the travel parameters, location acquisition and the
//! presentation layer. Every mutation recomputes the ring list before
//! returning, so a snapshot taken afterwards is never stale.

pub mod map;

use crate::geo::GeoPoint;
use crate::locate::{AcquisitionResult, Locator};
use crate::rings::{generate_day_rings, ring_labels, DayRing, RingLabel};
use crate::state::{Parameter, PinPhase, PinState, TravelParameters};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

pub use map::{LogMapView, MapView};

/// Render-ready view of the current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pin: Option<GeoPoint>,
    pub phase: PinPhase,
    /// Innermost day first; empty when no pin is set
    pub rings: Vec<DayRing>,
    pub labels: Vec<RingLabel>,
    pub miles_per_day: u32,
    pub max_days: u32,
    pub loading: bool,
    pub error_message: Option<String>,
}

/// Owns the interaction state and routes user events into it
pub struct Coordinator {
    pin: PinState,
    params: TravelParameters,
    rings: Vec<DayRing>,
    error_message: Option<String>,
    locator: Arc<Locator>,
    map: Box<dyn MapView>,
}

impl Coordinator {
    /// Create a coordinator with no pin
    pub fn new(locator: Arc<Locator>, params: TravelParameters) -> Self {
        Self {
            pin: PinState::new(),
            params,
            rings: Vec::new(),
            error_message: None,
            locator,
            map: Box::new(LogMapView),
        }
    }

    /// Use a specific map collaborator for view centering
    pub fn with_map_view(mut self, map: Box<dyn MapView>) -> Self {
        self.map = map;
        self
    }

    pub fn pin(&self) -> Option<GeoPoint> {
        self.pin.pin()
    }

    pub fn rings(&self) -> &[DayRing] {
        &self.rings
    }

    pub fn parameters(&self) -> TravelParameters {
        self.params
    }

    pub fn is_loading(&self) -> bool {
        self.locator.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Shared handle to the locator, for hosts that run acquisition
    /// without holding the coordinator
    pub fn locator(&self) -> Arc<Locator> {
        Arc::clone(&self.locator)
    }

    /// Labels for the current rings
    pub fn labels(&self) -> Vec<RingLabel> {
        match self.pin.pin() {
            Some(center) => ring_labels(center, &self.rings),
            None => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pin: self.pin.pin(),
            phase: self.pin.phase(),
            rings: self.rings.clone(),
            labels: self.labels(),
            miles_per_day: self.params.miles_per_day(),
            max_days: self.params.max_days(),
            loading: self.is_loading(),
            error_message: self.error_message.clone(),
        }
    }

    /// A click on the map drops (or moves) the pin
    pub fn on_map_click(&mut self, point: GeoPoint) {
        self.set_pin(point);
    }

    /// Locate the user and pin the result
    ///
    /// Failures are kept as the error message; the pin is left alone.
    pub async fn on_locate_requested(&mut self) -> AcquisitionResult {
        let result = self.locator.locate().await;
        self.apply_acquisition(result.clone());
        result
    }

    /// Apply the outcome of a location request
    ///
    /// Success pins the point and clears the error message. Failure replaces
    /// the error message and leaves the pin unchanged.
    pub fn apply_acquisition(&mut self, result: AcquisitionResult) {
        match result {
            AcquisitionResult::Success(point) => {
                info!("Located at {}", point);
                self.error_message = None;
                self.set_pin(point);
            }
            AcquisitionResult::Failure(failure) => {
                self.error_message = Some(failure.message);
            }
        }
    }

    pub fn on_clear_requested(&mut self) {
        if self.pin.phase() == PinPhase::Set {
            debug!("Clearing pin");
        }
        self.pin.clear_pin();
        self.recompute();
    }

    /// A control moved; clamp the value like the control would, then store it
    pub fn on_parameter_changed(&mut self, which: Parameter, value: u32) {
        match which {
            Parameter::MilesPerDay => {
                self.params
                    .set_miles_per_day(TravelParameters::clamp_miles_per_day(value));
            }
            Parameter::MaxDays => {
                self.params
                    .set_max_days(TravelParameters::clamp_max_days(value));
            }
        }
        debug!(
            "Parameters now {} mi/day over {} days",
            self.params.miles_per_day(),
            self.params.max_days()
        );
        self.recompute();
    }

    fn set_pin(&mut self, point: GeoPoint) {
        debug!("Pin set to {}", point);
        self.pin.set_pin(point);
        self.recompute();
        self.map.center_on(point, None);
    }

    fn recompute(&mut self) {
        self.rings = match self.pin.pin() {
            Some(_) => generate_day_rings(self.params.miles_per_day(), self.params.max_days()),
            None => Vec::new(),
        };
    }
}
