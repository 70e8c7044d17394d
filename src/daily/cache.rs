//! File-backed cache for the daily location at ~/.streetguess/daily_location.json.
//!
//! Holds exactly one record at a time; overwritten wholesale when the day
//! rolls over. Unreadable or malformed content counts as a miss.

use super::types::{DailyRecord, LocationPayload};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// The single-slot daily cache.
pub struct DailyCache {
    path: PathBuf,
}

impl DailyCache {
    /// Cache at the default location (~/.streetguess/daily_location.json).
    pub fn load() -> Self {
        Self { path: Self::default_path() }
    }

    /// Cache at a specific path (for testing and deployment overrides).
    pub fn load_from(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".streetguess")
            .join("daily_location.json")
    }

    fn read_record(&self) -> Option<DailyRecord> {
        let data = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Return the cached payload if the stored record is for `date`.
    pub fn get(&self, date: NaiveDate) -> Option<LocationPayload> {
        let record = self.read_record()?;
        if record.date == date {
            Some(record.payload)
        } else {
            None // stale: a previous day's record
        }
    }

    /// Overwrite the slot with a fresh record. Best-effort: an unwritable
    /// slot must not fail the request that generated the payload.
    pub fn put(&self, date: NaiveDate, payload: &LocationPayload) {
        let record = DailyRecord { date, payload: payload.clone() };
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(&record) {
            let _ = fs::write(&self.path, json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_cache() -> (DailyCache, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("daily_location.json");
        (DailyCache::load_from(path), dir)
    }

    fn payload() -> LocationPayload {
        LocationPayload {
            image: "https://maps.googleapis.com/maps/api/streetview?size=640x400".into(),
            name: "Street View".into(),
            lat: 42.36,
            lng: -71.06,
        }
    }

    #[test]
    fn test_put_get_same_day() {
        let (cache, _dir) = test_cache();
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        cache.put(date, &payload());
        assert_eq!(cache.get(date), Some(payload()));
    }

    #[test]
    fn test_stale_record_is_a_miss() {
        let (cache, _dir) = test_cache();
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        cache.put(yesterday, &payload());
        assert!(cache.get(today).is_none());
    }

    #[test]
    fn test_missing_file_is_a_miss() {
        let (cache, _dir) = test_cache();
        assert!(cache.get(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()).is_none());
    }

    #[test]
    fn test_malformed_file_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("daily_location.json");
        fs::write(&path, "{ not json at all").unwrap();

        let cache = DailyCache::load_from(path);
        assert!(cache.get(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()).is_none());
    }

    #[test]
    fn test_overwrite_replaces_record() {
        let (cache, _dir) = test_cache();
        let day1 = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        cache.put(day1, &payload());
        let mut second = payload();
        second.lat = 42.33;
        cache.put(day2, &second);

        assert!(cache.get(day1).is_none());
        assert_eq!(cache.get(day2), Some(second));
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("daily_location.json");
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        {
            let cache = DailyCache::load_from(path.clone());
            cache.put(date, &payload());
        }

        let cache2 = DailyCache::load_from(path);
        assert_eq!(cache2.get(date), Some(payload()));
    }
}
