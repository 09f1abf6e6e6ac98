//! Positioning providers
//!
//! A provider answers "where am I?" once per call. Providers report failures
//! already classified; the [`Locator`](super::Locator) adds the timeout.
//!
//! ## Flex Point
//! Adding a new provider requires:
//! 1. Implement `PositionProvider`
//! 2. Register it in `provider_from_config` and `available_providers`

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::ip_location::IpPositionProvider;
use crate::geo::GeoPoint;
use crate::locate::{AcquisitionFailure, FailureKind};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Source of the current position
///
/// Implementations must be thread-safe (Send + Sync) to work with async server.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Provider name as used in config (e.g., "ip", "fixed")
    fn name(&self) -> &'static str;

    /// Whether this provider can answer at all in the current environment
    fn is_available(&self) -> bool {
        true
    }

    /// Look up the current position
    async fn current_position(&self) -> std::result::Result<GeoPoint, AcquisitionFailure>;
}

/// Always reports the same point
#[derive(Debug, Clone)]
pub struct FixedPositionProvider {
    point: GeoPoint,
}

impl FixedPositionProvider {
    pub fn new(point: GeoPoint) -> Self {
        Self { point }
    }
}

#[async_trait]
impl PositionProvider for FixedPositionProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn current_position(&self) -> std::result::Result<GeoPoint, AcquisitionFailure> {
        Ok(self.point)
    }
}

/// Stands in for environments with no positioning capability
#[derive(Debug, Clone, Default)]
pub struct UnavailableProvider;

#[async_trait]
impl PositionProvider for UnavailableProvider {
    fn name(&self) -> &'static str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(&self) -> std::result::Result<GeoPoint, AcquisitionFailure> {
        Err(AcquisitionFailure::new(
            FailureKind::Unsupported,
            "Geolocation is not supported in this environment",
        ))
    }
}

/// Information about a positioning provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub description: String,
}

/// Build the provider named in `config.location.provider`
pub fn provider_from_config(config: &Config) -> Result<Arc<dyn PositionProvider>> {
    match config.location.provider.to_lowercase().as_str() {
        "ip" => Ok(Arc::new(IpPositionProvider::new())),
        "fixed" => {
            let point = config.fixed_location().ok_or_else(|| {
                Error::Config(
                    "The fixed provider needs both location.lat and location.lng".to_string(),
                )
            })?;
            point.validate()?;
            Ok(Arc::new(FixedPositionProvider::new(point)))
        }
        "none" => Ok(Arc::new(UnavailableProvider)),
        other => Err(Error::Config(format!(
            "Unknown location provider: {} (expected one of: {})",
            other,
            available_providers()
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// List all available providers
pub fn available_providers() -> Vec<ProviderInfo> {
    vec![
        ProviderInfo {
            name: "ip".to_string(),
            description: "IP geolocation via ip-api.com".to_string(),
        },
        ProviderInfo {
            name: "fixed".to_string(),
            description: "Configured location.lat / location.lng".to_string(),
        },
        ProviderInfo {
            name: "none".to_string(),
            description: "No positioning capability".to_string(),
        },
    ]
}
