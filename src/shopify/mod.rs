//! Outbound Shopify Admin GraphQL integration.

pub mod client;
pub mod error;
pub mod types;

pub use client::ShopifyClient;
pub use error::RelayError;
pub use types::{
    CreatedOrder, OrderCreateInput, OrderCreatePayload, ResourceKind, UserError, global_id,
};
