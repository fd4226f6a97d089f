//! Relay boundary types.
//!
//! - [`CreateOrderRequest`]: order deserialization from HTTP requests
//! - [`ValidatedOrder`]: business-validated order, output of [`validate_create_order`]
//! - [`RelayResponse`]: the simplified contract returned to the storefront

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::shopify::CreatedOrder;

// ============================================================================
// Inbound request
// ============================================================================

/// Order-creation request as posted by the storefront front end.
///
/// All fields optional at the wire level; [`validate_create_order`] enforces
/// the actual contract.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Numeric Shopify customer id. Always required.
    pub customer_numeric_id: Option<u64>,
    /// Numeric product id; required when no variant id is given.
    pub product_numeric_id: Option<u64>,
    /// Numeric variant id; takes precedence over the product id.
    pub variant_numeric_id: Option<u64>,
    /// Line item quantity; absent or zero defaults to 1.
    pub quantity: Option<i64>,
}

/// What the order should be placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTarget {
    /// Caller picked the variant directly; no lookup needed.
    Variant(u64),
    /// Only the product is known; the first variant must be resolved.
    Product(u64),
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub customer_id: u64,
    pub target: OrderTarget,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationRejection {
    #[error("customerNumericId is required")]
    MissingCustomer,
    #[error("provide productNumericId or variantNumericId")]
    MissingTarget,
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
}

/// Pure validation of an inbound order request.
///
/// Zero ids are treated the same as absent ones. Quantity rules: absent or
/// zero defaults to 1; negative or out-of-range values are rejected rather
/// than passed through.
pub fn validate_create_order(
    req: &CreateOrderRequest,
) -> Result<ValidatedOrder, OrderValidationRejection> {
    let customer_id = req
        .customer_numeric_id
        .filter(|&id| id != 0)
        .ok_or(OrderValidationRejection::MissingCustomer)?;

    // Variant takes precedence when both are present.
    let target = match (
        req.variant_numeric_id.filter(|&id| id != 0),
        req.product_numeric_id.filter(|&id| id != 0),
    ) {
        (Some(variant_id), _) => OrderTarget::Variant(variant_id),
        (None, Some(product_id)) => OrderTarget::Product(product_id),
        (None, None) => return Err(OrderValidationRejection::MissingTarget),
    };

    let quantity = match req.quantity {
        None | Some(0) => 1,
        Some(q) => {
            u32::try_from(q).map_err(|_| OrderValidationRejection::InvalidQuantity(q))?
        }
    };

    Ok(ValidatedOrder {
        customer_id,
        target,
        quantity,
    })
}

// ============================================================================
// Outbound response
// ============================================================================

/// Uniform response shape for every relay outcome.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RelayResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Created-order fields passed through verbatim from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Global order id, e.g. `gid://shopify/Order/1001`
    pub id: String,
    /// Human-facing order name, e.g. `#1001`
    pub name: String,
    /// Customer-facing order status page URL
    pub status_url: Option<String>,
}

impl From<CreatedOrder> for OrderSummary {
    fn from(order: CreatedOrder) -> Self {
        Self {
            id: order.id,
            name: order.name,
            status_url: order.status_url,
        }
    }
}

pub type RelayResult = (StatusCode, Json<RelayResponse>);

/// 200: the mutation succeeded with no userErrors.
pub fn order_created(order: OrderSummary) -> RelayResult {
    (
        StatusCode::OK,
        Json(RelayResponse {
            ok: true,
            order: Some(order),
            error: None,
        }),
    )
}

/// 400: input validation or upstream business-rule rejection.
pub fn rejected(error: impl Into<String>) -> RelayResult {
    (
        StatusCode::BAD_REQUEST,
        Json(RelayResponse {
            ok: false,
            order: None,
            error: Some(error.into()),
        }),
    )
}

/// 500: configuration, transport, or upstream API failure.
pub fn failed(error: impl Into<String>) -> RelayResult {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(RelayResponse {
            ok: false,
            order: None,
            error: Some(error.into()),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateOrderRequest {
        CreateOrderRequest {
            customer_numeric_id: Some(100),
            product_numeric_id: Some(200),
            variant_numeric_id: None,
            quantity: None,
        }
    }

    #[test]
    fn test_missing_customer_rejected() {
        let req = CreateOrderRequest {
            customer_numeric_id: None,
            ..base_request()
        };
        assert_eq!(
            validate_create_order(&req),
            Err(OrderValidationRejection::MissingCustomer)
        );

        // Zero is falsy, same as absent
        let req = CreateOrderRequest {
            customer_numeric_id: Some(0),
            ..base_request()
        };
        assert_eq!(
            validate_create_order(&req),
            Err(OrderValidationRejection::MissingCustomer)
        );
    }

    #[test]
    fn test_missing_both_targets_rejected() {
        let req = CreateOrderRequest {
            product_numeric_id: None,
            variant_numeric_id: Some(0),
            ..base_request()
        };
        assert_eq!(
            validate_create_order(&req),
            Err(OrderValidationRejection::MissingTarget)
        );
    }

    #[test]
    fn test_variant_takes_precedence_over_product() {
        let req = CreateOrderRequest {
            variant_numeric_id: Some(777),
            ..base_request()
        };
        let validated = validate_create_order(&req).unwrap();
        assert_eq!(validated.target, OrderTarget::Variant(777));
    }

    #[test]
    fn test_product_only_target() {
        let validated = validate_create_order(&base_request()).unwrap();
        assert_eq!(validated.target, OrderTarget::Product(200));
        assert_eq!(validated.customer_id, 100);
    }

    #[test]
    fn test_quantity_defaults() {
        // Absent -> 1
        let validated = validate_create_order(&base_request()).unwrap();
        assert_eq!(validated.quantity, 1);

        // Zero -> 1
        let req = CreateOrderRequest {
            quantity: Some(0),
            ..base_request()
        };
        assert_eq!(validate_create_order(&req).unwrap().quantity, 1);

        // Positive passes through
        let req = CreateOrderRequest {
            quantity: Some(5),
            ..base_request()
        };
        assert_eq!(validate_create_order(&req).unwrap().quantity, 5);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let req = CreateOrderRequest {
            quantity: Some(-3),
            ..base_request()
        };
        assert_eq!(
            validate_create_order(&req),
            Err(OrderValidationRejection::InvalidQuantity(-3))
        );
    }

    #[test]
    fn test_oversized_quantity_rejected() {
        let req = CreateOrderRequest {
            quantity: Some(i64::from(u32::MAX) + 1),
            ..base_request()
        };
        assert!(matches!(
            validate_create_order(&req),
            Err(OrderValidationRejection::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_response_serialization_omits_absent_fields() {
        let (status, body) = rejected("missing id");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "missing id");
        assert!(json.get("order").is_none());

        let (status, body) = order_created(OrderSummary {
            id: "gid://shopify/Order/1".to_string(),
            name: "#1".to_string(),
            status_url: Some("https://x/status".to_string()),
        });
        assert_eq!(status, StatusCode::OK);
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["order"]["statusUrl"], "https://x/status");
        assert!(json.get("error").is_none());
    }
}
