//! Server shared state
//!
//! Holds configuration and the single coordinator behind the HTTP API.

use crate::config::Config;
use crate::coordinator::Coordinator;
use crate::error::Result;
use crate::locate::{provider_from_config, Locator};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Pin, parameters and rings
    pub coordinator: Mutex<Coordinator>,

    /// Same locator the coordinator uses; requests run without the lock held
    pub locator: Arc<Locator>,
}

impl AppState {
    /// Create new application state with the provider named in config
    pub fn new(config: Config) -> Result<Self> {
        let provider = provider_from_config(&config)?;
        let locator = Locator::new(provider).with_timeout(config.location_timeout());
        Ok(Self::with_locator(config, locator))
    }

    /// Create application state around an existing locator
    pub fn with_locator(config: Config, locator: Locator) -> Self {
        let locator = Arc::new(locator);
        let coordinator = Coordinator::new(Arc::clone(&locator), config.travel_parameters());
        Self {
            config,
            coordinator: Mutex::new(coordinator),
            locator,
        }
    }
}
