//! day-rings: reachable-by-day range rings
//!
//! A library and CLI tool that drops a single pin on a map and computes the
//! concentric rings a traveller could reach after each day at a fixed daily
//! distance.
//!
//! ## Features
//!
//! - Pure ring generation (radius, color rank, labels)
//! - Single-pin interaction state with last-write-wins updates
//! - Location acquisition with a request timeout and loading flag
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use day_rings::coordinator::Coordinator;
//! use day_rings::geo::GeoPoint;
//! use day_rings::locate::{Locator, UnavailableProvider};
//! use day_rings::state::{Parameter, TravelParameters};
//! use std::sync::Arc;
//!
//! let locator = Arc::new(Locator::new(Arc::new(UnavailableProvider)));
//! let mut coordinator = Coordinator::new(locator, TravelParameters::default());
//!
//! coordinator.on_map_click(GeoPoint::new(39.8283, -98.5795));
//! coordinator.on_parameter_changed(Parameter::MaxDays, 3);
//!
//! for ring in coordinator.rings() {
//!     println!("Day {}: {:.0} m", ring.day, ring.radius_meters);
//! }
//! assert_eq!(coordinator.rings().len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod format;
pub mod geo;
pub mod locate;
pub mod rings;
pub mod server;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::{Coordinator, Snapshot};
pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use locate::{AcquisitionResult, Locator};
pub use rings::{generate_day_rings, DayRing};
