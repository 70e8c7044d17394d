//! Daily location provider — one deterministic coordinate per calendar day.
//!
//! The date string seeds the draw, so independent processes (and restarts)
//! agree on the day's location without coordination. The cache only saves
//! rework; a racing first request regenerates the identical payload.

use chrono::{Local, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use super::cache::DailyCache;
use super::types::{BoundingBox, LocationPayload, BOSTON_BOUNDS};

const STREET_VIEW_BASE: &str = "https://maps.googleapis.com/maps/api/streetview";
const IMAGE_WIDTH: u32 = 640;
const IMAGE_HEIGHT: u32 = 400;
const SEARCH_RADIUS_M: u32 = 300;

/// Display label attached to every payload.
pub const DISPLAY_NAME: &str = "Street View";

/// Env var holding the Street View Static API key. Optional: without it
/// the generated URL is keyless but still well-formed.
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// The provider owning the cache slot and the bounding region.
pub struct DailyLocationProvider {
    bounds: BoundingBox,
    cache: DailyCache,
}

impl DailyLocationProvider {
    pub fn new() -> Self {
        Self { bounds: BOSTON_BOUNDS, cache: DailyCache::load() }
    }

    /// Provider with a specific cache (for testing and --cache-file).
    pub fn with_cache(cache: DailyCache) -> Self {
        Self { bounds: BOSTON_BOUNDS, cache }
    }

    /// Today's payload, idempotent for the whole calendar day.
    pub fn today_location(&self) -> LocationPayload {
        self.location_for(Local::now().date_naive())
    }

    /// Payload for a specific date: cached record if it matches, otherwise
    /// generate, persist (best-effort), and return.
    pub fn location_for(&self, date: NaiveDate) -> LocationPayload {
        if let Some(payload) = self.cache.get(date) {
            return payload;
        }
        let payload = self.generate(date);
        self.cache.put(date, &payload);
        payload
    }

    fn generate(&self, date: NaiveDate) -> LocationPayload {
        let (lat, lng) = draw_coordinate(daily_seed(&date.to_string()), &self.bounds);
        let key = std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty());
        LocationPayload {
            image: street_view_url(lat, lng, key.as_deref()),
            name: DISPLAY_NAME.to_string(),
            lat,
            lng,
        }
    }
}

impl Default for DailyLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the day's seed: SHA-256 of the ISO date string, keeping the low
/// 32 bits of the digest.
pub fn daily_seed(date: &str) -> u32 {
    let digest = Sha256::digest(date.as_bytes());
    u32::from_be_bytes([digest[28], digest[29], digest[30], digest[31]])
}

/// Draw a coordinate uniformly from the box. Latitude first, then
/// longitude; the order is part of the determinism contract.
pub fn draw_coordinate(seed: u32, bounds: &BoundingBox) -> (f64, f64) {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
    let lat = rng.gen_range(bounds.min_lat..=bounds.max_lat);
    let lng = rng.gen_range(bounds.min_lng..=bounds.max_lng);
    (lat, lng)
}

/// Build a Street View Static API URL for the coordinate. The key is
/// appended only when present.
pub fn street_view_url(lat: f64, lng: f64, api_key: Option<&str>) -> String {
    let mut url = format!(
        "{}?size={}x{}&location={},{}&pitch=0&fov=90&radius={}",
        STREET_VIEW_BASE, IMAGE_WIDTH, IMAGE_HEIGHT, lat, lng, SEARCH_RADIUS_M,
    );
    if let Some(key) = api_key {
        url.push_str("&key=");
        url.push_str(key);
    }
    url
}
