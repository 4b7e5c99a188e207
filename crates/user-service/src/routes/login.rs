//! Credential check endpoint.

use std::sync::Arc;

use axum::extract::State;
use common::{ApiError, Json, UserId};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::store::UserStore;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub user_id: UserId,
}

/// POST /login — validate a username/password pair and return the user's ID.
#[tracing::instrument(skip(state, req), fields(username = %req.username))]
pub async fn login<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .users
        .authenticate(&req.username, &req.password)
        .await?;

    tracing::info!(user_id = %user.id, "login succeeded");
    Ok(Json(LoginResponse { user_id: user.id }))
}
