//! IP-based geolocation
//!
//! Uses ip-api.com to turn the caller's public IP into an approximate
//! position. Transport and API errors are classified into location failure
//! kinds.

use crate::constants::api::IP_API_URL;
use crate::geo::GeoPoint;
use crate::locate::{AcquisitionFailure, FailureKind, PositionProvider};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

/// IP location provider
#[derive(Debug, Clone)]
pub struct IpPositionProvider {
    client: reqwest::Client,
    url: String,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    country: Option<String>,
}

impl IpPositionProvider {
    /// Create a provider against the public ip-api.com endpoint
    pub fn new() -> Self {
        Self::with_url(IP_API_URL)
    }

    /// Create a provider against a specific endpoint
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    async fn fetch(&self) -> Result<GeoPoint, AcquisitionFailure> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !response.status().is_success() {
            return Err(classify_status(response.status()));
        }

        let data: IpApiResponse = response.json().await.map_err(|e| {
            AcquisitionFailure::new(
                FailureKind::Unknown,
                format!("Failed to parse IP location response: {}", e),
            )
        })?;

        point_from_response(data)
    }
}

impl Default for IpPositionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PositionProvider for IpPositionProvider {
    fn name(&self) -> &'static str {
        "ip"
    }

    async fn current_position(&self) -> Result<GeoPoint, AcquisitionFailure> {
        self.fetch().await
    }
}

fn classify_transport_error(err: reqwest::Error) -> AcquisitionFailure {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else {
        FailureKind::Unknown
    };
    AcquisitionFailure::new(kind, format!("IP location request failed: {}", err))
}

fn classify_status(status: StatusCode) -> AcquisitionFailure {
    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FailureKind::PermissionDenied,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => FailureKind::Timeout,
        _ => FailureKind::Unknown,
    };
    AcquisitionFailure::new(kind, format!("IP location API returned status: {}", status))
}

fn point_from_response(data: IpApiResponse) -> Result<GeoPoint, AcquisitionFailure> {
    if data.status != "success" {
        let reason = data.message.unwrap_or_else(|| "no reason given".to_string());
        return Err(AcquisitionFailure::new(
            FailureKind::Unknown,
            format!("IP location lookup failed: {}", reason),
        ));
    }

    let (Some(lat), Some(lng)) = (data.lat, data.lon) else {
        return Err(AcquisitionFailure::new(
            FailureKind::Unknown,
            "IP location response has no coordinates",
        ));
    };

    let point = GeoPoint::new(lat, lng);
    point
        .validate()
        .map_err(|e| AcquisitionFailure::new(FailureKind::Unknown, e.to_string()))?;

    let place = [data.city, data.country]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    debug!("IP location resolved to {} {}", point, place);

    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> IpApiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_response() {
        let data = parse(
            r#"{"status":"success","lat":47.6062,"lon":-122.3321,"city":"Seattle","country":"United States"}"#,
        );
        assert_eq!(point_from_response(data), Ok(GeoPoint::new(47.6062, -122.3321)));
    }

    #[test]
    fn test_fail_response() {
        let data = parse(r#"{"status":"fail","message":"private range"}"#);
        let failure = point_from_response(data).unwrap_err();

        assert_eq!(failure.kind, FailureKind::Unknown);
        assert!(failure.message.contains("private range"));
    }

    #[test]
    fn test_missing_coordinates() {
        let data = parse(r#"{"status":"success","lat":47.6}"#);
        assert!(point_from_response(data).is_err());
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let data = parse(r#"{"status":"success","lat":120.0,"lon":0.0}"#);
        assert!(point_from_response(data).is_err());
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN).kind,
            FailureKind::PermissionDenied
        );
        assert_eq!(
            classify_status(StatusCode::GATEWAY_TIMEOUT).kind,
            FailureKind::Timeout
        );
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS).kind,
            FailureKind::Unknown
        );
    }

    #[test]
    fn test_provider_name() {
        let provider = IpPositionProvider::new();
        assert_eq!(provider.name(), "ip");
        assert!(provider.is_available());
    }
}
