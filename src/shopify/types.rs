//! Wire types for the Shopify Admin GraphQL API.
//!
//! Covers the two operations the relay consumes: the first-variant lookup
//! query and the `orderCreate` mutation, plus the generic GraphQL envelopes
//! they travel in.

use serde::{Deserialize, Serialize};

// ============================================================================
// Global identifiers
// ============================================================================

/// Resource kinds addressable through Shopify global identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Customer,
    Product,
    ProductVariant,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Customer => "Customer",
            ResourceKind::Product => "Product",
            ResourceKind::ProductVariant => "ProductVariant",
        }
    }
}

/// Build an opaque global identifier: `gid://shopify/<Type>/<numericId>`.
pub fn global_id(kind: ResourceKind, numeric_id: u64) -> String {
    format!("gid://shopify/{}/{}", kind.as_str(), numeric_id)
}

// ============================================================================
// GraphQL envelopes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

// ============================================================================
// GetDefaultVariant query
// ============================================================================

pub const DEFAULT_VARIANT_QUERY: &str = r#"
query GetDefaultVariant($id: ID!) {
  product(id: $id) {
    variants(first: 1) {
      edges {
        node { id }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub struct DefaultVariantVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct DefaultVariantData {
    pub product: Option<ProductVariants>,
}

#[derive(Debug, Deserialize)]
pub struct ProductVariants {
    pub variants: VariantConnection,
}

#[derive(Debug, Deserialize)]
pub struct VariantConnection {
    #[serde(default)]
    pub edges: Vec<VariantEdge>,
}

#[derive(Debug, Deserialize)]
pub struct VariantEdge {
    pub node: VariantNode,
}

#[derive(Debug, Deserialize)]
pub struct VariantNode {
    pub id: String,
}

// ============================================================================
// CreateOrder mutation
// ============================================================================

pub const ORDER_CREATE_MUTATION: &str = r#"
mutation CreateOrder($order: OrderCreateOrderInput!) {
  orderCreate(order: $order) {
    order {
      id
      name
      statusUrl
    }
    userErrors {
      field
      message
    }
  }
}
"#;

/// Tag attached to every relayed order. Hardcoded business rule carried over
/// from the production backend, not configurable at request time.
pub const ORDER_TAG: &str = "pedido_por_admin";

/// Note attached to every relayed order. Same hardcoded policy as [`ORDER_TAG`].
pub const ORDER_NOTE: &str = "Pedido creado desde backend Render";

#[derive(Debug, Serialize)]
pub struct OrderCreateVariables {
    pub order: OrderCreateInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateInput {
    pub customer_id: String,
    pub line_items: Vec<LineItemInput>,
    pub tags: Vec<String>,
    pub note: String,
}

impl OrderCreateInput {
    /// Single-line-item order with the fixed tag/note policy applied.
    pub fn single_item(customer_gid: String, variant_gid: String, quantity: u32) -> Self {
        Self {
            customer_id: customer_gid,
            line_items: vec![LineItemInput {
                variant_id: variant_gid,
                quantity,
            }],
            tags: vec![ORDER_TAG.to_string()],
            note: ORDER_NOTE.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub variant_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateData {
    pub order_create: OrderCreatePayload,
}

/// Mutation payload: the created order, or business-rule rejections.
///
/// Shopify may return both at once; callers must treat non-empty
/// `user_errors` as failure regardless of the `order` field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatePayload {
    pub order: Option<CreatedOrder>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub id: String,
    pub name: String,
    pub status_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_id_format() {
        assert_eq!(
            global_id(ResourceKind::Customer, 123),
            "gid://shopify/Customer/123"
        );
        assert_eq!(
            global_id(ResourceKind::Product, 42),
            "gid://shopify/Product/42"
        );
        assert_eq!(
            global_id(ResourceKind::ProductVariant, 987654321),
            "gid://shopify/ProductVariant/987654321"
        );
    }

    #[test]
    fn test_order_create_input_serializes_camel_case() {
        let input = OrderCreateInput::single_item(
            "gid://shopify/Customer/1".to_string(),
            "gid://shopify/ProductVariant/2".to_string(),
            3,
        );
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["customerId"], "gid://shopify/Customer/1");
        assert_eq!(json["lineItems"][0]["variantId"], "gid://shopify/ProductVariant/2");
        assert_eq!(json["lineItems"][0]["quantity"], 3);
        assert_eq!(json["tags"][0], ORDER_TAG);
        assert_eq!(json["note"], ORDER_NOTE);
    }

    #[test]
    fn test_order_create_payload_deserializes() {
        let json = serde_json::json!({
            "orderCreate": {
                "order": {
                    "id": "gid://shopify/Order/1001",
                    "name": "#1001",
                    "statusUrl": "https://shop.example/status/1001"
                },
                "userErrors": []
            }
        });
        let data: OrderCreateData = serde_json::from_value(json).unwrap();
        let order = data.order_create.order.unwrap();
        assert_eq!(order.name, "#1001");
        assert!(data.order_create.user_errors.is_empty());
    }

    #[test]
    fn test_user_errors_without_order() {
        let json = serde_json::json!({
            "orderCreate": {
                "order": null,
                "userErrors": [
                    {"field": ["order", "customerId"], "message": "Customer is invalid"}
                ]
            }
        });
        let data: OrderCreateData = serde_json::from_value(json).unwrap();
        assert!(data.order_create.order.is_none());
        assert_eq!(data.order_create.user_errors[0].message, "Customer is invalid");
    }

    #[test]
    fn test_variant_connection_defaults_to_empty_edges() {
        let json = serde_json::json!({
            "product": { "variants": {} }
        });
        let data: DefaultVariantData = serde_json::from_value(json).unwrap();
        assert!(data.product.unwrap().variants.edges.is_empty());
    }
}
