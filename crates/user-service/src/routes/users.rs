//! User lookup endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};
use common::{ApiError, Json, UserId};

use super::AppState;
use crate::store::{User, UserStore};

/// GET /user/{user_id} — return a user's public profile.
#[tracing::instrument(skip(state))]
pub async fn get<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get_user(&user_id).await?;
    Ok(Json(user))
}
