//! User endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use letsbus_core::UserRecord;
use serde::Deserialize;

use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{UserPathId, ValidJson};
use crate::http::server::AppState;
use crate::models::{NewUser, UserUpdate};

/// Create user request
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Update user request; at least one field
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// GET /users - all users, in id order
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users))
}

/// GET /users/{id}
async fn get_user(
    State(state): State<Arc<AppState>>,
    UserPathId(id): UserPathId,
) -> Result<Json<UserRecord>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    Ok(Json(user))
}

/// POST /users
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserRecord>), ApiError> {
    let user = NewUser::new(&req.name, &req.email)?;
    let created = UserRepo::new(&state.pool).create(user).await?;
    tracing::info!(id = %created.id, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /users/{id}
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserPathId(id): UserPathId,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> Result<Json<UserRecord>, ApiError> {
    let update = UserUpdate::new(req.name.as_deref(), req.email.as_deref())?;
    let updated = UserRepo::new(&state.pool).update(id, update).await?;
    Ok(Json(updated))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user))
}
