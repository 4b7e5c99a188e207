//! HTTP handlers for the cart service.

pub mod cart;

use crate::store::CartStore;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CartStore> {
    pub carts: S,
}
