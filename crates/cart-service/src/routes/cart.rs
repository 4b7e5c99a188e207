//! Cart endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use common::{Json, UserId};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::model::{Cart, ProductId};
use crate::store::CartStore;

// -- Request types --

/// Body of both `/cart/add` and `/cart/clear`.
///
/// `/cart/clear` requires `product_id` too but ignores it.
#[derive(Debug, Deserialize)]
pub struct CartRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
}

// -- Response types --

#[derive(Serialize)]
pub struct ClearResponse {
    pub status: &'static str,
    pub user_id: UserId,
}

// -- Handlers --

/// POST /cart/add — add one unit of a product to the user's cart.
#[tracing::instrument(skip(state))]
pub async fn add<S: CartStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CartRequest>,
) -> Json<Cart> {
    let cart = state.carts.add_item(&req.user_id, req.product_id).await;
    tracing::debug!(
        lines = cart.items.len(),
        units = cart.total_quantity(),
        "cart updated"
    );
    Json(cart)
}

/// GET /cart/{user_id} — return the user's cart, possibly empty.
#[tracing::instrument(skip(state))]
pub async fn get<S: CartStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(user_id): Path<UserId>,
) -> Json<Cart> {
    Json(state.carts.get_cart(&user_id).await)
}

/// POST /cart/clear — drop the user's cart.
#[tracing::instrument(skip(state))]
pub async fn clear<S: CartStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CartRequest>,
) -> Json<ClearResponse> {
    state.carts.clear_cart(&req.user_id).await;
    Json(ClearResponse {
        status: "cleared",
        user_id: req.user_id,
    })
}
