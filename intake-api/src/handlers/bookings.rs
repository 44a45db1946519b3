//! Booking intake: `POST /bookings` and `GET /bookings`.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use intake_core::{Booking, BookingRequest};

use super::fetch_records;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub booking: Booking,
}

#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub bookings: Vec<Booking>,
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let booking = request.into_booking()?;
    let value = serde_json::to_value(&booking)?;
    state.store.set(&booking.id, value).await?;

    info!(id = %booking.id, service = %booking.service, "Stored booking");
    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            booking,
        }),
    ))
}

pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<BookingListResponse>, ApiError> {
    let mut bookings: Vec<Booking> = fetch_records(&state, "booking:").await?;
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(BookingListResponse {
        success: true,
        bookings,
    }))
}
