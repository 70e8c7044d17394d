//! Core types for the daily location subsystem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The payload handed to players: an image to look at plus the coordinate
/// it was taken from. Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPayload {
    /// Street View Static API URL for the client to fetch.
    pub image: String,
    /// Display label, always "Street View".
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// The single persisted record: which day the payload belongs to.
/// Serialized as `{ "date": "YYYY-MM-DD", "payload": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub payload: LocationPayload,
}

/// A fixed rectangle of latitude/longitude from which daily coordinates
/// are drawn.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && (self.min_lng..=self.max_lng).contains(&lng)
    }
}

/// Central Boston, roughly downtown and the surrounding neighborhoods:
/// Jamaica Plain to Charlestown, Brookline/Allston to the Harbor.
pub const BOSTON_BOUNDS: BoundingBox = BoundingBox {
    min_lat: 42.32,
    max_lat: 42.39,
    min_lng: -71.15,
    max_lng: -71.00,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains() {
        assert!(BOSTON_BOUNDS.contains(42.3601, -71.0589)); // downtown
        assert!(!BOSTON_BOUNDS.contains(42.50, -71.0589)); // too far north
        assert!(!BOSTON_BOUNDS.contains(42.3601, -70.90)); // out in the harbor
    }

    #[test]
    fn test_record_wire_schema() {
        let record = DailyRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            payload: LocationPayload {
                image: "https://example.com/img".into(),
                name: "Street View".into(),
                lat: 42.35,
                lng: -71.06,
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2026-08-06\""));
        assert!(json.contains("\"lng\":-71.06"));

        let back: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.payload, record.payload);
    }
}
