//! JSON output formatter

use crate::coordinator::Snapshot;
use crate::error::Result;
use crate::format::OutputFormatter;

/// JSON formatter - outputs the full snapshot as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON snapshot"
    }

    fn format(&self, snapshot: &Snapshot) -> Result<String> {
        Ok(serde_json::to_string_pretty(snapshot)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::pinned_snapshot;

    #[test]
    fn test_json_format() {
        let output = JsonFormatter.format(&pinned_snapshot()).unwrap();

        let parsed: Snapshot = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.rings.len(), 5);
        assert_eq!(parsed.max_days, 5);
        assert!(parsed.pin.is_some());

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value.get("rings").is_some());
        assert!(value.get("labels").is_some());
        assert!(value.get("loading").is_some());
    }

    #[test]
    fn test_json_formatter_info() {
        assert_eq!(JsonFormatter.name(), "json");
        assert!(!JsonFormatter.description().is_empty());
    }
}
