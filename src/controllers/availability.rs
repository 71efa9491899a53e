//! availability.rs
//!
//! The availability-check operation: given a time window, list every active
//! room with no confirmed booking overlapping that window, priced for the
//! window.
//!
//! Read-only. The room scan and the per-room conflict lookups are separate
//! reads with no shared transaction, so a room can be booked between them.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::{Booking, Room};
use crate::services::availability::{AvailabilityError, TimeWindow};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/booking/check-availability", post(check_availability))
}

/* ---------- request / response shapes ---------- */

#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

#[derive(Debug, Serialize)]
struct RoomQuote {
    room_id: i64,
    room_name: String,
    room_type: String,
    capacity: i32,
    hourly_rate: f64,
    total_cost: f64,
    amenities: Vec<String>,
    location: String,
    floor: i32,
}

impl RoomQuote {
    fn new(room: Room, window: &TimeWindow) -> Self {
        let total_cost = window.rental_cost(room.hourly_rate);
        RoomQuote {
            room_id: room.room_id,
            room_name: room.room_name,
            room_type: room.room_type,
            capacity: room.capacity,
            hourly_rate: room.hourly_rate,
            total_cost,
            amenities: room.amenities,
            location: room.location,
            floor: room.floor,
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestDetails {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    duration_hours: i64,
}

#[derive(Debug, Serialize)]
struct AvailabilityResponse {
    status: &'static str,
    request_details: RequestDetails,
    available_rooms: Vec<RoomQuote>,
    total_available: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl AvailabilityResponse {
    fn new(window: &TimeWindow, available_rooms: Vec<RoomQuote>) -> Self {
        // An empty list is still a success, just with an advisory note
        let message = if available_rooms.is_empty() {
            Some("No rooms available for the requested time slot".to_string())
        } else {
            None
        };
        let total_available = available_rooms.len();
        AvailabilityResponse {
            status: "success",
            request_details: RequestDetails {
                start_time: window.start(),
                end_time: window.end(),
                duration_hours: window.duration_hours(),
            },
            available_rooms,
            total_available,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    error_code: &'static str,
    message: String,
    details: ErrorDetails,
}

impl ErrorResponse {
    fn invalid_time_range(err: AvailabilityError) -> Self {
        let message = err.to_string();
        let AvailabilityError::InvalidTimeRange { start_time, end_time } = err;
        ErrorResponse {
            status: "error",
            error_code: "INVALID_TIME_RANGE",
            message,
            details: ErrorDetails { start_time, end_time },
        }
    }
}

/* ---------- AVAILABILITY ---------- */

// POST /api/booking/check-availability
async fn check_availability(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AvailabilityQuery>,
) -> Result<Response, (StatusCode, String)> {
    let window = match TimeWindow::new(params.start_time, params.end_time) {
        Ok(window) => window,
        Err(err) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid_time_range(err)),
            )
                .into_response());
        }
    };

    let rooms = Room::list_active(&state.db).await.map_err(|e| {
        tracing::error!("check_availability: failed to list active rooms: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load rooms".to_string())
    })?;

    let mut available_rooms = Vec::new();
    for room in rooms {
        let conflict = Booking::has_confirmed_conflict(
            &state.db,
            room.room_id,
            window.start(),
            window.end(),
        )
        .await
        .map_err(|e| {
            tracing::error!(
                "check_availability: conflict lookup failed for room {}: {:?}",
                room.room_id,
                e
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to check bookings".to_string())
        })?;

        if !conflict {
            available_rooms.push(RoomQuote::new(room, &window));
        }
    }

    let response = AvailabilityResponse::new(&window, available_rooms);
    tracing::info!(
        "availability {} - {}: {} rooms free",
        window.start(),
        window.end(),
        response.total_available
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}
