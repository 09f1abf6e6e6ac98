//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::constants::rings::PALETTE;
use crate::constants::travel::{MAX_DAYS, MAX_MILES_PER_DAY, MIN_DAYS, MIN_MILES_PER_DAY};
use crate::coordinator::Snapshot;
use crate::error::Error;
use crate::geo::GeoPoint;
use crate::locate::AcquisitionResult;
use crate::rings::{generate_day_rings, ring_labels, DayRing, RingLabel};
use crate::server::state::AppState;
use crate::state::Parameter;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    let router = Router::new()
        .route("/api/state", get(state_handler))
        .route("/api/pin", post(pin_handler).delete(clear_pin_handler))
        .route("/api/parameters", put(parameters_handler))
        .route("/api/locate", post(locate_handler))
        .route("/api/rings", get(rings_handler))
        .route("/api/map", get(map_handler))
        .route("/api/palette", get(palette_handler));

    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).append_index_html_on_directories(true),
        ),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidParameters(_) => "INVALID_PARAMETERS",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Location(_) => "LOCATION_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Current snapshot
///
/// GET /api/state
async fn state_handler(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let coordinator = state.coordinator.lock().await;
    Json(coordinator.snapshot())
}

/// Pin request body
#[derive(Debug, Deserialize)]
pub struct PinRequest {
    pub lat: f64,
    pub lng: f64,
}

/// Drop or move the pin (a map click)
///
/// POST /api/pin
async fn pin_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PinRequest>,
) -> Result<Json<Snapshot>, ApiError> {
    let point = GeoPoint::new(req.lat, req.lng);
    point.validate()?;

    let mut coordinator = state.coordinator.lock().await;
    coordinator.on_map_click(point);
    Ok(Json(coordinator.snapshot()))
}

/// Remove the pin
///
/// DELETE /api/pin
async fn clear_pin_handler(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let mut coordinator = state.coordinator.lock().await;
    coordinator.on_clear_requested();
    Json(coordinator.snapshot())
}

/// Parameter update body; omitted fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct ParametersRequest {
    pub miles_per_day: Option<u32>,
    pub max_days: Option<u32>,
}

/// Update travel parameters (values are clamped like the sliders clamp them)
///
/// PUT /api/parameters
async fn parameters_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParametersRequest>,
) -> Json<Snapshot> {
    let mut coordinator = state.coordinator.lock().await;
    if let Some(value) = req.miles_per_day {
        coordinator.on_parameter_changed(Parameter::MilesPerDay, value);
    }
    if let Some(value) = req.max_days {
        coordinator.on_parameter_changed(Parameter::MaxDays, value);
    }
    Json(coordinator.snapshot())
}

/// Locate response
#[derive(Debug, Serialize, Deserialize)]
pub struct LocateResponse {
    pub result: AcquisitionResult,
    pub state: Snapshot,
}

/// Pin the caller's current position
///
/// POST /api/locate
///
/// The coordinator lock is released while the request is pending, so
/// `GET /api/state` keeps answering and reports `loading: true`. Overlapping
/// locate calls are not deduplicated; clients disable the trigger while
/// loading.
async fn locate_handler(State(state): State<Arc<AppState>>) -> Json<LocateResponse> {
    let result = state.locator.locate().await;

    let mut coordinator = state.coordinator.lock().await;
    coordinator.apply_acquisition(result.clone());
    Json(LocateResponse {
        result,
        state: coordinator.snapshot(),
    })
}

/// Stateless ring query
#[derive(Debug, Deserialize)]
pub struct RingsQuery {
    pub miles_per_day: Option<u32>,
    pub max_days: Option<u32>,
    /// Optional center; when both are given, labels are included
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Rings response
#[derive(Debug, Serialize, Deserialize)]
pub struct RingsResponse {
    pub rings: Vec<DayRing>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<RingLabel>,
}

/// Compute rings without touching the shared pin
///
/// GET /api/rings
async fn rings_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RingsQuery>,
) -> Result<Json<RingsResponse>, ApiError> {
    let defaults = state.config.travel_parameters();
    let miles_per_day = query.miles_per_day.unwrap_or(defaults.miles_per_day());
    let max_days = query.max_days.unwrap_or(defaults.max_days());

    if !(MIN_MILES_PER_DAY..=MAX_MILES_PER_DAY).contains(&miles_per_day) {
        return Err(Error::InvalidParameters(format!(
            "miles_per_day must be between {} and {}",
            MIN_MILES_PER_DAY, MAX_MILES_PER_DAY
        ))
        .into());
    }
    if !(MIN_DAYS..=MAX_DAYS).contains(&max_days) {
        return Err(Error::InvalidParameters(format!(
            "max_days must be between {} and {}",
            MIN_DAYS, MAX_DAYS
        ))
        .into());
    }

    let rings = generate_day_rings(miles_per_day, max_days);
    let labels = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => {
            let center = GeoPoint::new(lat, lng);
            center.validate()?;
            ring_labels(center, &rings)
        }
        _ => Vec::new(),
    };

    Ok(Json(RingsResponse { rings, labels }))
}

/// Initial camera response
#[derive(Debug, Serialize, Deserialize)]
pub struct MapResponse {
    pub center: GeoPoint,
    pub zoom: u8,
}

/// Initial map camera
///
/// GET /api/map
async fn map_handler(State(state): State<Arc<AppState>>) -> Json<MapResponse> {
    Json(MapResponse {
        center: state.config.map_center(),
        zoom: state.config.map.zoom,
    })
}

/// Palette response
#[derive(Debug, Serialize, Deserialize)]
pub struct PaletteResponse {
    pub colors: Vec<String>,
}

/// Ring colors in color-rank order
///
/// GET /api/palette
async fn palette_handler() -> Json<PaletteResponse> {
    Json(PaletteResponse {
        colors: PALETTE.iter().map(|c| c.to_string()).collect(),
    })
}
