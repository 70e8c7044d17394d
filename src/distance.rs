//! Great-circle distance on a spherical Earth (haversine formula).
//!
//! Good to ~0.5% against the real ellipsoid, which is plenty for scoring
//! guesses a few kilometers apart.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates given in decimal degrees,
/// in kilometers.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Scoring distance: haversine rounded to two decimal places.
pub fn distance_km(target_lat: f64, target_lng: f64, user_lat: f64, user_lng: f64) -> f64 {
    round2(haversine_km(target_lat, target_lng, user_lat, user_lng))
}

fn round2(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
