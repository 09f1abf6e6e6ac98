//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default miles travelled per day
pub const DEFAULT_MILES_PER_DAY: u32 = 350;

/// Default number of day rings
pub const DEFAULT_MAX_DAYS: u32 = 5;

/// Default positioning provider
pub const DEFAULT_LOCATION_PROVIDER: &str = "ip";

/// Default location request timeout in seconds
pub const DEFAULT_LOCATION_TIMEOUT_SECS: u64 = 10;

/// Initial map center latitude (geographic center of the contiguous US)
pub const DEFAULT_MAP_CENTER_LAT: f64 = 39.8283;

/// Initial map center longitude
pub const DEFAULT_MAP_CENTER_LNG: f64 = -98.5795;

/// Initial map zoom level
pub const DEFAULT_MAP_ZOOM: u8 = 5;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7979;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "day-rings";
