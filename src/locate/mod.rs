//! Location acquisition
//!
//! Wraps a [`PositionProvider`] with a request-level timeout and a loading
//! flag. Each call to [`Locator::locate`] resolves exactly once, to a point or
//! to a classified failure. Nothing here retries or deduplicates requests.

pub mod provider;

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

pub use provider::{
    available_providers, provider_from_config, FixedPositionProvider, PositionProvider,
    ProviderInfo, UnavailableProvider,
};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a location request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No positioning capability in this environment
    Unsupported,
    PermissionDenied,
    Timeout,
    Unknown,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "unsupported"),
            Self::PermissionDenied => write!(f, "permission_denied"),
            Self::Timeout => write!(f, "timeout"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A classified location failure with a user-facing message
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct AcquisitionFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl AcquisitionFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of one location request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AcquisitionResult {
    Success(GeoPoint),
    Failure(AcquisitionFailure),
}

impl AcquisitionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<Result<GeoPoint, AcquisitionFailure>> for AcquisitionResult {
    fn from(result: Result<GeoPoint, AcquisitionFailure>) -> Self {
        match result {
            Ok(point) => Self::Success(point),
            Err(failure) => Self::Failure(failure),
        }
    }
}

/// Runs location requests against a provider
pub struct Locator {
    provider: Arc<dyn PositionProvider>,
    timeout: Duration,
    loading: watch::Sender<bool>,
}

impl Locator {
    /// Create a locator with the default 10 second timeout
    pub fn new(provider: Arc<dyn PositionProvider>) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            provider,
            timeout: DEFAULT_TIMEOUT,
            loading,
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Watch the loading flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Request the current position
    ///
    /// An unavailable provider fails with `Unsupported` without touching the
    /// loading flag. Otherwise the flag is true for the duration of the
    /// request and goes back to false once, even if this future is dropped.
    pub async fn locate(&self) -> AcquisitionResult {
        if !self.provider.is_available() {
            debug!("Positioning provider '{}' is unavailable", self.provider.name());
            return AcquisitionResult::Failure(AcquisitionFailure::new(
                FailureKind::Unsupported,
                "Geolocation is not supported in this environment",
            ));
        }

        let _loading = LoadingGuard::start(&self.loading);
        debug!(
            "Requesting position from '{}' (timeout {:?})",
            self.provider.name(),
            self.timeout
        );

        let request = self.provider.current_position();
        let result = match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => AcquisitionResult::from(result),
            Err(_) => AcquisitionResult::Failure(AcquisitionFailure::new(
                FailureKind::Timeout,
                format!(
                    "Location request timed out after {} seconds",
                    self.timeout.as_secs_f64()
                ),
            )),
        };

        if let AcquisitionResult::Failure(failure) = &result {
            warn!("Location request failed ({}): {}", failure.kind, failure.message);
        }

        result
    }
}

/// Holds the loading flag high until dropped
struct LoadingGuard<'a> {
    flag: &'a watch::Sender<bool>,
}

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.send_replace(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::OnceLock;

    /// Never answers
    struct HangingProvider;

    #[async_trait]
    impl PositionProvider for HangingProvider {
        fn name(&self) -> &'static str {
            "hanging"
        }

        async fn current_position(&self) -> Result<GeoPoint, AcquisitionFailure> {
            std::future::pending().await
        }
    }

    /// Answers with a fixed point and records whether loading was visible
    struct ProbeProvider {
        point: GeoPoint,
        loading: OnceLock<watch::Receiver<bool>>,
        saw_loading: AtomicBool,
    }

    #[async_trait]
    impl PositionProvider for ProbeProvider {
        fn name(&self) -> &'static str {
            "probe"
        }

        async fn current_position(&self) -> Result<GeoPoint, AcquisitionFailure> {
            if let Some(loading) = self.loading.get() {
                self.saw_loading.store(*loading.borrow(), Ordering::SeqCst);
            }
            Ok(self.point)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_classified() {
        let locator = Locator::new(Arc::new(HangingProvider));
        let result = locator.locate().await;

        match result {
            AcquisitionResult::Failure(failure) => {
                assert_eq!(failure.kind, FailureKind::Timeout);
                assert!(failure.message.contains("10"));
            }
            other => panic!("expected timeout, got {:?}", other),
        }
        assert!(!locator.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_timeout() {
        let locator =
            Locator::new(Arc::new(HangingProvider)).with_timeout(Duration::from_millis(250));
        let started = tokio::time::Instant::now();

        let result = locator.locate().await;

        assert!(!result.is_success());
        assert!(started.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_unsupported_never_sets_loading() {
        let locator = Locator::new(Arc::new(UnavailableProvider));
        let mut loading = locator.subscribe();

        let result = locator.locate().await;

        match result {
            AcquisitionResult::Failure(failure) => {
                assert_eq!(failure.kind, FailureKind::Unsupported)
            }
            other => panic!("expected unsupported, got {:?}", other),
        }
        assert!(!loading.has_changed().unwrap());
        assert!(!*loading.borrow_and_update());
    }

    #[tokio::test]
    async fn test_success_toggles_loading() {
        let point = GeoPoint::new(51.5074, -0.1278);
        let provider = Arc::new(ProbeProvider {
            point,
            loading: OnceLock::new(),
            saw_loading: AtomicBool::new(false),
        });
        let locator = Locator::new(provider.clone());
        provider.loading.set(locator.subscribe()).unwrap();

        let mut loading = locator.subscribe();
        let result = locator.locate().await;

        assert_eq!(result, AcquisitionResult::Success(point));
        assert!(provider.saw_loading.load(Ordering::SeqCst));
        assert!(loading.has_changed().unwrap());
        assert!(!*loading.borrow_and_update());
    }

    #[tokio::test]
    async fn test_provider_failure_passed_through() {
        let failure = AcquisitionFailure::new(FailureKind::PermissionDenied, "User denied");
        let locator = Locator::new(Arc::new(FailingProvider(failure.clone())));

        assert_eq!(locator.locate().await, AcquisitionResult::Failure(failure));
        assert!(!locator.is_loading());
    }

    #[tokio::test]
    async fn test_no_retry() {
        let provider = Arc::new(CountingProvider(AtomicUsize::new(0)));
        let locator = Locator::new(provider.clone());

        assert!(!locator.locate().await.is_success());
        assert_eq!(provider.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_request_resets_loading() {
        let locator = Locator::new(Arc::new(HangingProvider));

        let pending = tokio::time::timeout(Duration::from_secs(1), locator.locate()).await;

        assert!(pending.is_err());
        assert!(!locator.is_loading());
    }

    #[test]
    fn test_result_serialization() {
        let ok = AcquisitionResult::Success(GeoPoint::new(1.5, 2.5));
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["lat"], 1.5);

        let err = AcquisitionResult::Failure(AcquisitionFailure::new(FailureKind::Timeout, "slow"));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["kind"], "timeout");
        assert_eq!(json["message"], "slow");
    }

    struct FailingProvider(AcquisitionFailure);

    #[async_trait]
    impl PositionProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn current_position(&self) -> Result<GeoPoint, AcquisitionFailure> {
            Err(self.0.clone())
        }
    }

    struct CountingProvider(AtomicUsize);

    #[async_trait]
    impl PositionProvider for CountingProvider {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn current_position(&self) -> Result<GeoPoint, AcquisitionFailure> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(AcquisitionFailure::new(FailureKind::Unknown, "no fix"))
        }
    }
}
