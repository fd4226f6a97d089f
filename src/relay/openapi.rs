//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use super::types::{CreateOrderRequest, OrderSummary, RelayResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopify Order Relay API",
        version = "1.0.0",
        description = "Relays simplified storefront order requests to the Shopify Admin GraphQL API.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::relay::handlers::create_order,
        crate::relay::handlers::liveness,
    ),
    components(
        schemas(
            CreateOrderRequest,
            RelayResponse,
            OrderSummary,
        )
    ),
    tags(
        (name = "Orders", description = "Order creation relay"),
        (name = "System", description = "Liveness checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Shopify Order Relay API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/create-order"));
        assert!(spec.paths.paths.contains_key("/"));
    }
}
