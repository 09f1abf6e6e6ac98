//! Centralized constants for the day-rings crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Meters in one statute mile
    pub const METERS_PER_MILE: f64 = 1609.344;

    /// Meters per degree of latitude (approximate, varies slightly with latitude)
    pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;
}

/// Ring rendering constants
pub mod rings {
    /// Fill opacity shared by every ring
    pub const FILL_OPACITY: f64 = 0.08;

    /// Fraction of the ring radius at which the day label sits (north of center)
    pub const LABEL_RADIUS_FRACTION: f64 = 0.85;

    /// Ring colors, innermost day first. Longer horizons cycle through them.
    pub const PALETTE: [&str; 7] = [
        "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#06B6D4",
    ];
}

/// Travel parameter bounds
pub mod travel {
    pub const MIN_MILES_PER_DAY: u32 = 100;
    pub const MAX_MILES_PER_DAY: u32 = 600;
    pub const MILES_PER_DAY_STEP: u32 = 25;

    pub const MIN_DAYS: u32 = 1;
    pub const MAX_DAYS: u32 = 7;
}

/// External API endpoints
pub mod api {
    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";
}
