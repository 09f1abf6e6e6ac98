//! Map collaborator
//!
//! The coordinator only ever asks the map to re-center. Drawing circles,
//! labels and the marker is done from a [`Snapshot`](super::Snapshot).

use crate::geo::GeoPoint;
use tracing::debug;

/// Camera control exposed by the map surface
pub trait MapView: Send {
    /// Center the view on `point`; `None` keeps the current zoom
    fn center_on(&mut self, point: GeoPoint, zoom: Option<u8>);
}

/// Map stand-in for headless hosts (CLI, HTTP): logs camera moves
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMapView;

impl MapView for LogMapView {
    fn center_on(&mut self, point: GeoPoint, zoom: Option<u8>) {
        match zoom {
            Some(zoom) => debug!("Centering map on {} at zoom {}", point, zoom),
            None => debug!("Centering map on {}", point),
        }
    }
}
