//! Output formatters
//!
//! Provides trait-based output formatting for coordinator snapshots.

pub mod json;
pub mod text;

use crate::coordinator::Snapshot;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a snapshot of the pin, parameters and rings
    fn format(&self, snapshot: &Snapshot) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON snapshot".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable ring table".to_string(),
        },
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::coordinator::{Coordinator, Snapshot};
    use crate::geo::GeoPoint;
    use crate::locate::{Locator, UnavailableProvider};
    use crate::state::TravelParameters;
    use std::sync::Arc;

    /// Snapshot with a pin at the center of the contiguous US
    pub fn pinned_snapshot() -> Snapshot {
        let locator = Locator::new(Arc::new(UnavailableProvider));
        let mut coordinator = Coordinator::new(Arc::new(locator), TravelParameters::default());
        coordinator.on_map_click(GeoPoint::new(39.8283, -98.5795));
        coordinator.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        for info in &formats {
            let formatter = get_formatter(&info.name).unwrap();
            assert_eq!(formatter.name(), info.name);
            assert_eq!(formatter.description(), info.description);
        }
    }
}
