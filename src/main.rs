//! Order Relay entry point.
//!
//! ```text
//! ┌────────────┐    ┌──────────────┐    ┌─────────────────┐
//! │ Storefront │───▶│ Order Relay  │───▶│ Shopify Admin   │
//! │ (HTTP/JSON)│    │ (validate +  │    │ GraphQL API     │
//! │            │◀───│  map result) │◀───│ (orderCreate)   │
//! └────────────┘    └──────────────┘    └─────────────────┘
//! ```

use std::sync::Arc;

use order_relay::config::AppConfig;
use order_relay::logging::init_logging;
use order_relay::relay::{run_server, state::AppState};
use order_relay::shopify::ShopifyClient;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = init_logging(&config);

    tracing::info!("Starting order relay (env: {})", env);

    let shopify_config = config.shopify.clone().apply_env();
    if !shopify_config.is_complete() {
        // Boot anyway: every relay call will fail fast with an internal
        // error until the store domain and token are configured.
        tracing::warn!(
            "Shopify configuration incomplete: set SHOPIFY_STORE_DOMAIN and SHOPIFY_ADMIN_TOKEN"
        );
    }

    let shopify = match ShopifyClient::new(shopify_config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ FATAL: Failed to create Shopify client: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(shopify));
    run_server(&config.server, state).await;
}
