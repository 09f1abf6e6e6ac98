//! Human-readable text output formatter

use crate::coordinator::Snapshot;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::rings::paint_order;

/// Text formatter - outputs a summary, one line per ring and the paint order
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable ring table"
    }

    fn format(&self, snapshot: &Snapshot) -> Result<String> {
        let mut output = String::new();

        match snapshot.pin {
            Some(pin) => output.push_str(&format!("Pin: {}\n", pin)),
            None => output.push_str("Pin: none\n"),
        }
        output.push_str(&format!(
            "Travel: {} mi/day for {} days\n",
            snapshot.miles_per_day, snapshot.max_days
        ));

        if let Some(message) = &snapshot.error_message {
            output.push_str(&format!("Location error: {}\n", message));
        }

        if snapshot.rings.is_empty() {
            output.push_str("\nNo rings (drop a pin first)\n");
            return Ok(output);
        }

        output.push_str("\nRings:\n");
        for ring in &snapshot.rings {
            output.push_str(&format!(
                "  Day {}: {} mi ({:.1} m) {}\n",
                ring.day,
                ring.distance_miles,
                ring.radius_meters,
                ring.color()
            ));
        }

        let order: Vec<String> = paint_order(&snapshot.rings)
            .map(|ring| ring.day.to_string())
            .collect();
        output.push_str(&format!("Paint order: {}\n", order.join(", ")));

        Ok(output)
    }
}
