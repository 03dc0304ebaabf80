use aerobook_core::models::{Booking, BookingDetail, BookingPatch, NewBooking};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AppError, flights::MessageResponse, state::AppState};

#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking: Booking,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/booking", post(create_booking))
        .route("/api/booking/dashboard", get(dashboard))
        .route("/api/booking/dashboard/{id}", patch(update_booking))
        .route("/api/booking/{id}", delete(delete_booking))
}

/// GET /api/booking/dashboard
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<Vec<BookingDetail>>, AppError> {
    Ok(Json(state.bookings.dashboard().await?))
}

/// POST /api/booking
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<NewBooking>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), AppError> {
    let booking = state.bookings.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking created successfully".to_string(),
            booking,
        }),
    ))
}

/// PATCH /api/booking/dashboard/{id}
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<BookingPatch>,
) -> Result<StatusCode, AppError> {
    state.bookings.update(id, req).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/booking/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state.bookings.delete(id).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "Booking deleted successfully".to_string(),
        }),
    ))
}
