//! Daily location subsystem.
//!
//! Picks one coordinate per calendar day inside the city bounds, derives a
//! street-view image URL for it, and keeps the result in a single-record
//! file cache so the whole day serves the same payload.

pub mod cache;
pub mod provider;
pub mod types;

pub use cache::DailyCache;
pub use provider::{daily_seed, draw_coordinate, street_view_url, DailyLocationProvider};
pub use types::{BoundingBox, DailyRecord, LocationPayload, BOSTON_BOUNDS};
