//! Day-ring generation
//!
//! Turns a daily travel distance and a day horizon into the list of
//! concentric rings to draw around the pin:
//! - Ring `i` has radius `i * miles_per_day` miles, converted to meters
//! - Colors cycle through a fixed palette
//! - Labels sit north of the center inside each ring (see [`label`])

pub mod label;

use crate::constants::geo::METERS_PER_MILE;
use crate::constants::rings::{FILL_OPACITY, PALETTE};
use serde::{Deserialize, Serialize};

pub use label::{ring_labels, RingLabel};

/// One reachable-by-day circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRing {
    /// 1-based day number
    pub day: u32,
    /// Cumulative distance covered by the end of this day
    pub distance_miles: u64,
    pub radius_meters: f64,
    /// Index into the color palette
    pub color_rank: usize,
    pub fill_opacity: f64,
}

impl DayRing {
    /// Stroke/fill color from the default palette
    pub fn color(&self) -> &'static str {
        PALETTE[self.color_rank % PALETTE.len()]
    }
}

/// Generate rings for days `1..=max_days` using the default palette
///
/// Callers must pass `miles_per_day > 0` and `max_days >= 1`. Values are not
/// clamped here.
pub fn generate_day_rings(miles_per_day: u32, max_days: u32) -> Vec<DayRing> {
    generate_day_rings_with_palette_len(miles_per_day, max_days, PALETTE.len())
}

/// Generate rings whose color ranks cycle through `palette_len` colors
///
/// # Arguments
/// * `miles_per_day` - Daily travel distance, must be positive
/// * `max_days` - Number of rings, must be at least 1
/// * `palette_len` - Number of colors available, must be at least 1
///
/// # Returns
/// Rings ordered by ascending day (innermost first)
pub fn generate_day_rings_with_palette_len(
    miles_per_day: u32,
    max_days: u32,
    palette_len: usize,
) -> Vec<DayRing> {
    (1..=max_days)
        .map(|day| {
            let distance_miles = u64::from(day) * u64::from(miles_per_day);
            DayRing {
                day,
                distance_miles,
                radius_meters: distance_miles as f64 * METERS_PER_MILE,
                color_rank: (day as usize - 1) % palette_len,
                fill_opacity: FILL_OPACITY,
            }
        })
        .collect()
}

/// Rings in paint order: outermost first, so translucent inner rings are not
/// covered by outer ones on surfaces that draw in list order.
pub fn paint_order(rings: &[DayRing]) -> impl Iterator<Item = &DayRing> {
    rings.iter().rev()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_count_and_days() {
        for max_days in 1..=7 {
            let rings = generate_day_rings(350, max_days);
            assert_eq!(rings.len(), max_days as usize);

            let days: Vec<u32> = rings.iter().map(|r| r.day).collect();
            let expected: Vec<u32> = (1..=max_days).collect();
            assert_eq!(days, expected);
        }
    }

    #[test]
    fn test_radius_formula() {
        for miles_per_day in [100, 125, 350, 600] {
            let rings = generate_day_rings(miles_per_day, 7);
            for ring in &rings {
                assert_relative_eq!(
                    ring.radius_meters,
                    ring.day as f64 * miles_per_day as f64 * 1609.344,
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_radius_strictly_increasing() {
        let rings = generate_day_rings(100, 7);
        for pair in rings.windows(2) {
            assert!(pair[1].radius_meters > pair[0].radius_meters);
        }
    }

    #[test]
    fn test_default_scenario() {
        let rings = generate_day_rings(350, 5);
        let radii: Vec<f64> = rings.iter().map(|r| r.radius_meters).collect();
        let expected = [563_270.4, 1_126_540.8, 1_689_811.2, 2_253_081.6, 2_816_352.0];

        for (actual, expected) in radii.iter().zip(expected) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-6);
        }

        let miles: Vec<u64> = rings.iter().map(|r| r.distance_miles).collect();
        assert_eq!(miles, vec![350, 700, 1050, 1400, 1750]);
    }

    #[test]
    fn test_fill_opacity_constant() {
        assert!(generate_day_rings(600, 7)
            .iter()
            .all(|r| r.fill_opacity == 0.08));
    }

    #[test]
    fn test_color_rank_cycles_short_palette() {
        let rings = generate_day_rings_with_palette_len(200, 7, 3);
        let ranks: Vec<usize> = rings.iter().map(|r| r.color_rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_default_palette_colors() {
        let rings = generate_day_rings(350, 7);
        assert_eq!(rings[0].color(), "#3B82F6");
        assert_eq!(rings[6].color(), "#06B6D4");
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_day_rings(475, 6), generate_day_rings(475, 6));
    }

    #[test]
    fn test_paint_order_is_outermost_first() {
        let rings = generate_day_rings(350, 3);
        let days: Vec<u32> = paint_order(&rings).map(|r| r.day).collect();
        assert_eq!(days, vec![3, 2, 1]);
    }
}
