//! Ring labels
//!
//! Each ring gets a "Day N / distance" label placed due north of the pin,
//! slightly inside the ring edge.

use crate::constants::rings::LABEL_RADIUS_FRACTION;
use crate::geo::GeoPoint;
use crate::rings::DayRing;
use serde::{Deserialize, Serialize};

/// Text label anchored inside a day ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingLabel {
    pub day: u32,
    pub position: GeoPoint,
    /// Two lines: "Day N" and the cumulative distance
    pub text: String,
}

/// Build one label per ring around `center`
pub fn ring_labels(center: GeoPoint, rings: &[DayRing]) -> Vec<RingLabel> {
    rings
        .iter()
        .map(|ring| RingLabel {
            day: ring.day,
            position: center.offset_north(ring.radius_meters * LABEL_RADIUS_FRACTION),
            text: format!("Day {}\n{} mi", ring.day, group_thousands(ring.distance_miles)),
        })
        .collect()
}

/// Format an integer with comma thousands separators (1750 -> "1,750")
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::generate_day_rings;
    use approx::assert_relative_eq;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(600), "600");
        assert_eq!(group_thousands(1750), "1,750");
        assert_eq!(group_thousands(4200), "4,200");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_label_text() {
        let center = GeoPoint::new(39.8283, -98.5795);
        let labels = ring_labels(center, &generate_day_rings(350, 5));

        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0].text, "Day 1\n350 mi");
        assert_eq!(labels[4].text, "Day 5\n1,750 mi");
    }

    #[test]
    fn test_label_position_inside_ring() {
        let center = GeoPoint::new(0.0, 10.0);
        let rings = generate_day_rings(100, 2);
        let labels = ring_labels(center, &rings);

        let expected_lat = rings[1].radius_meters * 0.85 / 111_320.0;
        assert_relative_eq!(labels[1].position.lat, expected_lat, epsilon = 1e-9);
        assert_eq!(labels[1].position.lng, 10.0);
        assert!(labels[0].position.lat < labels[1].position.lat);
    }

    #[test]
    fn test_no_rings_no_labels() {
        assert!(ring_labels(GeoPoint::new(0.0, 0.0), &[]).is_empty());
    }
}
