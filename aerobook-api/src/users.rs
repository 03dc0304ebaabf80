use aerobook_core::models::{NewUser, User, UserPatch};
use aerobook_shared::Masked;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{auth, error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub new_user: User,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Masked<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/user", get(list_users))
        .route("/api/user/register", post(register))
        .route("/api/user/login", post(login))
        .route("/api/user/{id}", patch(update_user).delete(delete_user))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/user
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>, AppError> {
    let users = state.users.list().await?;
    Ok(Json(UserListResponse { users }))
}

/// POST /api/user/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<NewUser>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let new_user = state.users.register(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            new_user,
        }),
    ))
}

/// POST /api/user/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state.users.login(&req.email, req.password).await?;
    let token = auth::issue_token(&state.auth, &user)?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// DELETE /api/user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/user/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UserPatch>,
) -> Result<StatusCode, AppError> {
    state.users.update(id, req).await?;
    Ok(StatusCode::NO_CONTENT)
}
