use aerobook_core::models::{Flight, FlightPatch, NewFlight};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
pub struct FlightCreatedResponse {
    pub message: String,
    pub flight: Flight,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightUpdatedResponse {
    pub message: String,
    pub updated_flight: Flight,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flight", get(list_flights).post(create_flight))
        .route(
            "/api/flight/{id}",
            get(get_flight).patch(update_flight).delete(delete_flight),
        )
}

/// GET /api/flight
pub async fn list_flights(State(state): State<AppState>) -> Result<Json<Vec<Flight>>, AppError> {
    Ok(Json(state.flights.list().await?))
}

/// POST /api/flight
pub async fn create_flight(
    State(state): State<AppState>,
    Json(req): Json<NewFlight>,
) -> Result<(StatusCode, Json<FlightCreatedResponse>), AppError> {
    let flight = state.flights.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(FlightCreatedResponse {
            message: "Flight created successfully".to_string(),
            flight,
        }),
    ))
}

/// GET /api/flight/{id}
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Flight>, AppError> {
    Ok(Json(state.flights.get(id).await?))
}

/// PATCH /api/flight/{id}
pub async fn update_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FlightPatch>,
) -> Result<Json<FlightUpdatedResponse>, AppError> {
    let updated_flight = state.flights.update(id, req).await?;
    Ok(Json(FlightUpdatedResponse {
        message: "Flight updated successfully".to_string(),
        updated_flight,
    }))
}

/// DELETE /api/flight/{id}
///
/// Always 200, whether or not the flight existed.
pub async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.flights.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Flight deleted successfully".to_string(),
    }))
}
