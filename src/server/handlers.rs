use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::daily::LocationPayload;
use crate::distance::distance_km;

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /health ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ─── GET /api/get-location ───────────────────────────────────────

pub async fn get_location(State(state): State<Arc<AppState>>) -> Json<LocationPayload> {
    let start = Instant::now();

    let payload = state.provider.today_location();

    let elapsed = start.elapsed();
    eprintln!("[{}] GET /api/get-location -> {},{} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        payload.lat, payload.lng,
        elapsed.as_secs_f64() * 1000.0,
    );

    Json(payload)
}

// ─── POST /api/check-distance ────────────────────────────────────

#[derive(Deserialize)]
pub struct DistanceRequest {
    pub target_lat: f64,
    pub target_lng: f64,
    pub user_lat: f64,
    pub user_lng: f64,
}

#[derive(Serialize)]
pub struct DistanceResponse {
    pub distance: f64,
    pub unit: &'static str,
}

pub async fn check_distance(
    payload: Result<Json<DistanceRequest>, JsonRejection>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let start = Instant::now();

    // Missing or mistyped fields surface as a 400 naming the field.
    let Json(req) = payload.map_err(|rejection| {
        api_error(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", rejection.body_text()))
    })?;

    if !(-90.0..=90.0).contains(&req.target_lat) || !(-90.0..=90.0).contains(&req.user_lat)
        || !(-180.0..=180.0).contains(&req.target_lng) || !(-180.0..=180.0).contains(&req.user_lng)
    {
        return Err(api_error(StatusCode::BAD_REQUEST,
            "Invalid coordinates. Lat: -90..90, Lng: -180..180"));
    }

    let distance = distance_km(req.target_lat, req.target_lng, req.user_lat, req.user_lng);

    let elapsed = start.elapsed();
    eprintln!("[{}] POST /api/check-distance -> {} km ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        distance,
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(DistanceResponse { distance, unit: "km" }))
}
