//! Cart store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::UserId;
use tokio::sync::RwLock;

use crate::model::{Cart, CartItem, ProductId};

/// Trait for cart operations. All of them are infallible.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Adds one unit of `product_id` to the user's cart, creating the cart
    /// if needed, and returns the updated cart.
    async fn add_item(&self, user_id: &UserId, product_id: ProductId) -> Cart;

    /// Returns the user's cart, or an empty view if there is none.
    async fn get_cart(&self, user_id: &UserId) -> Cart;

    /// Removes the user's cart. Clearing a missing cart is a no-op.
    async fn clear_cart(&self, user_id: &UserId);
}

/// In-memory cart store shared by all request handlers.
///
/// Each operation runs under a single lock acquisition, so concurrent adds
/// to the same cart never lose an increment.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStore {
    carts: Arc<RwLock<HashMap<UserId, Vec<CartItem>>>>,
}

impl InMemoryCartStore {
    /// Creates a new empty cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of users that currently have a cart.
    pub async fn cart_count(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn add_item(&self, user_id: &UserId, product_id: ProductId) -> Cart {
        let mut carts = self.carts.write().await;
        let items = carts.entry(user_id.clone()).or_default();

        // Linear scan keeps first-seen order without a second index
        match items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => items.push(CartItem::single(product_id)),
        }

        metrics::counter!("cart_items_added_total").increment(1);
        Cart {
            user_id: user_id.clone(),
            items: items.clone(),
        }
    }

    async fn get_cart(&self, user_id: &UserId) -> Cart {
        let carts = self.carts.read().await;
        match carts.get(user_id) {
            Some(items) => Cart {
                user_id: user_id.clone(),
                items: items.clone(),
            },
            None => Cart::empty(user_id.clone()),
        }
    }

    async fn clear_cart(&self, user_id: &UserId) {
        let removed = self.carts.write().await.remove(user_id).is_some();
        if removed {
            metrics::counter!("cart_clears_total").increment(1);
        }
    }
}
