//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/day-rings/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::state::TravelParameters;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial travel parameters
    #[serde(default)]
    pub travel: TravelConfig,

    /// Positioning settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Initial map camera
    #[serde(default)]
    pub map: MapConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Initial travel parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Miles travelled per day (clamped to 100..=600, step 25)
    #[serde(default = "default_miles_per_day")]
    pub miles_per_day: u32,

    /// Number of day rings (clamped to 1..=7)
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

/// Positioning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Provider name: "ip", "fixed" or "none"
    #[serde(default = "default_location_provider")]
    pub provider: String,

    /// Request timeout in seconds
    #[serde(default = "default_location_timeout")]
    pub timeout_secs: u64,

    /// Latitude reported by the "fixed" provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude reported by the "fixed" provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Initial map camera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_center_lat")]
    pub center_lat: f64,

    #[serde(default = "default_map_center_lng")]
    pub center_lng: f64,

    #[serde(default = "default_map_zoom")]
    pub zoom: u8,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static files to serve alongside the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

// Default value functions for serde
fn default_miles_per_day() -> u32 {
    DEFAULT_MILES_PER_DAY
}
fn default_max_days() -> u32 {
    DEFAULT_MAX_DAYS
}
fn default_location_provider() -> String {
    DEFAULT_LOCATION_PROVIDER.to_string()
}
fn default_location_timeout() -> u64 {
    DEFAULT_LOCATION_TIMEOUT_SECS
}
fn default_map_center_lat() -> f64 {
    DEFAULT_MAP_CENTER_LAT
}
fn default_map_center_lng() -> f64 {
    DEFAULT_MAP_CENTER_LNG
}
fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            travel: TravelConfig::default(),
            location: LocationConfig::default(),
            map: MapConfig::default(),
            output: OutputConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            miles_per_day: default_miles_per_day(),
            max_days: default_max_days(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: default_location_provider(),
            timeout_secs: default_location_timeout(),
            lat: None,
            lng: None,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_map_center_lat(),
            center_lng: default_map_center_lng(),
            zoom: default_map_zoom(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found or unset
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["travel", "miles_per_day"] => Some(self.travel.miles_per_day.to_string()),
            ["travel", "max_days"] => Some(self.travel.max_days.to_string()),

            ["location", "provider"] => Some(self.location.provider.clone()),
            ["location", "timeout_secs"] => Some(self.location.timeout_secs.to_string()),
            ["location", "lat"] => self.location.lat.map(|v| v.to_string()),
            ["location", "lng"] => self.location.lng.map(|v| v.to_string()),

            ["map", "center_lat"] => Some(self.map.center_lat.to_string()),
            ["map", "center_lng"] => Some(self.map.center_lng.to_string()),
            ["map", "zoom"] => Some(self.map.zoom.to_string()),

            ["output", "format"] => Some(self.output.format.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["server", "static_dir"] => self
                .server
                .static_dir
                .as_ref()
                .map(|p| p.display().to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["travel", "miles_per_day"] => {
                self.travel.miles_per_day = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid miles per day value: {}", value))
                })?;
            }
            ["travel", "max_days"] => {
                self.travel.max_days = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid day count value: {}", value))
                })?;
            }

            ["location", "provider"] => {
                self.location.provider = value.to_string();
            }
            ["location", "timeout_secs"] => {
                self.location.timeout_secs = value
                    .parse()
                    .ok()
                    .filter(|secs: &u64| *secs > 0)
                    .ok_or_else(|| Error::Config(format!("Invalid timeout value: {}", value)))?;
            }
            ["location", "lat"] => {
                self.location.lat = Some(value.parse().map_err(|_| {
                    Error::Config(format!("Invalid latitude value: {}", value))
                })?);
            }
            ["location", "lng"] => {
                self.location.lng = Some(value.parse().map_err(|_| {
                    Error::Config(format!("Invalid longitude value: {}", value))
                })?);
            }

            ["map", "center_lat"] => {
                self.map.center_lat = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid latitude value: {}", value))
                })?;
            }
            ["map", "center_lng"] => {
                self.map.center_lng = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid longitude value: {}", value))
                })?;
            }
            ["map", "zoom"] => {
                self.map.zoom = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid zoom value: {}", value))
                })?;
            }

            ["output", "format"] => {
                self.output.format = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }
            ["server", "static_dir"] => {
                self.server.static_dir = Some(PathBuf::from(value));
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "travel.miles_per_day",
            "travel.max_days",
            "location.provider",
            "location.timeout_secs",
            "location.lat",
            "location.lng",
            "map.center_lat",
            "map.center_lng",
            "map.zoom",
            "output.format",
            "server.host",
            "server.port",
            "server.static_dir",
        ]
    }

    /// Initial travel parameters, clamped the same way the UI controls clamp
    pub fn travel_parameters(&self) -> TravelParameters {
        TravelParameters::new(
            TravelParameters::clamp_miles_per_day(self.travel.miles_per_day),
            TravelParameters::clamp_max_days(self.travel.max_days),
        )
    }

    /// Location request timeout, at least one second
    pub fn location_timeout(&self) -> Duration {
        Duration::from_secs(self.location.timeout_secs.max(1))
    }

    /// Point reported by the "fixed" provider, if both coordinates are set
    pub fn fixed_location(&self) -> Option<GeoPoint> {
        match (self.location.lat, self.location.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }

    /// Initial map center
    pub fn map_center(&self) -> GeoPoint {
        GeoPoint::new(self.map.center_lat, self.map.center_lng)
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
