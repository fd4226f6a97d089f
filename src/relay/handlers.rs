//! Relay handlers (create-order, liveness)

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::shopify::{OrderCreateInput, RelayError, ResourceKind, global_id};

use super::state::AppState;
use super::types::{
    CreateOrderRequest, OrderTarget, RelayResponse, RelayResult, failed, order_created, rejected,
    validate_create_order,
};

/// Create-order relay endpoint
///
/// POST /create-order
///
/// Linear pipeline: validate -> (optionally) resolve variant -> submit
/// mutation -> map result. One upstream call when the variant id is given
/// directly, two when the default variant must be resolved.
#[utoipa::path(
    post,
    path = "/create-order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = RelayResponse, content_type = "application/json"),
        (status = 400, description = "Validation failure or upstream business-rule rejection", body = RelayResponse),
        (status = 500, description = "Configuration, transport, or upstream API failure", body = RelayResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> RelayResult {
    // 1. Validate input; no upstream call on failure
    let validated = match validate_create_order(&req) {
        Ok(v) => v,
        Err(e) => return rejected(e.to_string()),
    };

    let customer_gid = global_id(ResourceKind::Customer, validated.customer_id);

    // 2. Resolve the sellable variant
    let variant_gid = match validated.target {
        OrderTarget::Variant(variant_id) => global_id(ResourceKind::ProductVariant, variant_id),
        OrderTarget::Product(product_id) => {
            let product_gid = global_id(ResourceKind::Product, product_id);
            match state.shopify.default_variant_id(&product_gid).await {
                Ok(Some(gid)) => gid,
                Ok(None) => return rejected("product has no variants available"),
                Err(e) => return upstream_failure(e),
            }
        }
    };

    // 3. Submit the mutation
    let input = OrderCreateInput::single_item(customer_gid, variant_gid, validated.quantity);
    let payload = match state.shopify.order_create(input).await {
        Ok(p) => p,
        Err(e) => return upstream_failure(e),
    };

    // 4. Map the result; userErrors win even when an order is also present
    if !payload.user_errors.is_empty() {
        let message = payload
            .user_errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!("Order rejected by Shopify: {}", message);
        return rejected(message);
    }

    match payload.order {
        Some(order) => order_created(order.into()),
        None => {
            tracing::error!("orderCreate returned neither order nor userErrors");
            failed("Upstream response missing order")
        }
    }
}

fn upstream_failure(err: RelayError) -> RelayResult {
    tracing::error!("Create-order relay failed: {}", err);
    failed(err.to_string())
}

/// Liveness probe
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service alive", content_type = "text/plain")
    ),
    tag = "System"
)]
pub async fn liveness() -> &'static str {
    "Shopify order relay OK"
}
