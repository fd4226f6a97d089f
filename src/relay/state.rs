use std::sync::Arc;

use crate::shopify::ShopifyClient;

/// Shared relay state. Immutable after startup; requests never touch
/// anything mutable in here.
#[derive(Clone)]
pub struct AppState {
    /// Upstream Shopify client (shared, connection reuse via reqwest)
    pub shopify: Arc<ShopifyClient>,
}

impl AppState {
    pub fn new(shopify: Arc<ShopifyClient>) -> Self {
        Self { shopify }
    }
}
