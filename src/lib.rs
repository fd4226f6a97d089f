//! Order Relay - Storefront to Shopify order bridge
//!
//! A thin backend relay: accepts a simplified order-creation request from a
//! storefront front end, resolves a product to a sellable variant when the
//! caller did not pick one, forwards a single `orderCreate` mutation to the
//! Shopify Admin GraphQL API, and translates the platform response into a
//! simplified JSON contract.
//!
//! # Modules
//!
//! - [`config`] - Application configuration (YAML file + environment)
//! - [`logging`] - Tracing setup with rolling file output
//! - [`relay`] - HTTP surface: routing, request validation, result mapping
//! - [`shopify`] - Typed outbound client for the Shopify Admin GraphQL API

pub mod config;
pub mod logging;
pub mod relay;
pub mod shopify;

// Convenient re-exports at crate root
pub use config::{AppConfig, ServerConfig, ShopifyConfig};
pub use shopify::{RelayError, ShopifyClient};
