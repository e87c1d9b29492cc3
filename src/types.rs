//! Core data types for the extractor.

use serde::{Deserialize, Serialize};

/// A named map location extracted from a drawable path element.
///
/// Field order is the JSON output key order: `name` first, `path_data` second.
/// Both fields are non-empty for every record the extractor emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Region identifier, typically an ISO-style country code (e.g., "FRA").
    pub name: String,

    /// Raw SVG path commands; opaque, passed through unmodified.
    pub path_data: String,
}

impl Location {
    /// Create a new location record.
    #[must_use]
    pub fn new(name: impl Into<String>, path_data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path_data: path_data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let location = Location::new("FRA", "M0 0 L1 1");
        assert_eq!(location.name, "FRA");
        assert_eq!(location.path_data, "M0 0 L1 1");
    }

    #[test]
    fn test_location_serializes_name_before_path_data() {
        let location = Location::new("FRA", "M0 0 L1 1");
        let json = serde_json::to_string(&location).unwrap();
        assert_eq!(json, r#"{"name":"FRA","path_data":"M0 0 L1 1"}"#);
    }

    #[test]
    fn test_location_round_trip() {
        let location = Location::new("Curaçao", "M½ ½ Z");
        let json = serde_json::to_string(&location).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, location);
    }
}
