use axum::{extract::State, http::StatusCode, Json};

use models::user::{User, UserDraft};
use service::user_service;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// `GET /users/` — full listing of the users table.
pub async fn read_users(State(state): State<ServerState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = user_service::list_users(state.store.as_ref()).await?;
    Ok(Json(users))
}

/// `POST /user/` — create one user.
pub async fn create_user(
    State(state): State<ServerState>,
    Json(draft): Json<UserDraft>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let created = user_service::create_user(state.store.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
