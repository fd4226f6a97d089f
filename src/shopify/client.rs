//! Shopify Admin GraphQL client.
//!
//! Wraps the single Admin API endpoint the relay talks to. Supports a mock
//! mode for testing without a real store: canned responses are served in
//! FIFO order and every invoked operation is recorded so tests can assert
//! call-count properties.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::debug;

use crate::config::ShopifyConfig;

use super::error::RelayError;
use super::types::{
    DEFAULT_VARIANT_QUERY, DefaultVariantData, DefaultVariantVariables, GraphQlRequest,
    GraphQlResponse, ORDER_CREATE_MUTATION, OrderCreateData, OrderCreateInput,
    OrderCreatePayload, OrderCreateVariables,
};

/// One recorded mock invocation: operation name + serialized variables.
pub type RecordedCall = (&'static str, serde_json::Value);

struct MockState {
    responses: VecDeque<Result<serde_json::Value, RelayError>>,
    calls: Vec<RecordedCall>,
}

pub struct ShopifyClient {
    config: ShopifyConfig,
    /// HTTP client for Admin API calls. Absent in mock mode.
    client: Option<reqwest::Client>,
    mock: Option<Mutex<MockState>>,
}

impl ShopifyClient {
    /// Create a client backed by a real HTTP transport.
    ///
    /// Construction succeeds even with incomplete config; required fields
    /// are checked per call so that every relay call fails fast with an
    /// internal error rather than the process refusing to boot.
    pub fn new(config: ShopifyConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| RelayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client: Some(client),
            mock: None,
        })
    }

    /// Create a mock client for testing.
    pub fn new_mock(config: ShopifyConfig) -> Self {
        Self {
            config,
            client: None,
            mock: Some(Mutex::new(MockState {
                responses: VecDeque::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Queue the next mock result: the GraphQL `data` object, or an error.
    pub fn push_mock_response(&self, response: Result<serde_json::Value, RelayError>) {
        let mock = self.mock.as_ref().expect("not a mock client");
        mock.lock().unwrap().responses.push_back(response);
    }

    /// Operations invoked so far (mock mode only).
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        let mock = self.mock.as_ref().expect("not a mock client");
        mock.lock().unwrap().calls.clone()
    }

    /// Number of upstream operations invoked so far (mock mode only).
    pub fn call_count(&self) -> usize {
        let mock = self.mock.as_ref().expect("not a mock client");
        mock.lock().unwrap().calls.len()
    }

    pub fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    /// Admin GraphQL endpoint for the configured store.
    fn endpoint(&self) -> Result<String, RelayError> {
        let domain = self
            .config
            .store_domain
            .as_deref()
            .filter(|d| !d.is_empty())
            .ok_or(RelayError::MissingConfig("SHOPIFY_STORE_DOMAIN"))?;
        Ok(format!(
            "https://{}/admin/api/{}/graphql.json",
            domain, self.config.api_version
        ))
    }

    fn access_token(&self) -> Result<&str, RelayError> {
        self.config
            .access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(RelayError::MissingConfig("SHOPIFY_ADMIN_TOKEN"))
    }

    /// Issue one GraphQL operation and return the decoded `data` object.
    async fn graphql<V, D>(
        &self,
        operation: &'static str,
        query: &'static str,
        variables: V,
    ) -> Result<D, RelayError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        if let Some(mock) = &self.mock {
            let queued = {
                let mut state = mock.lock().unwrap();
                let recorded = serde_json::to_value(&variables)
                    .map_err(|e| RelayError::Transport(format!("Bad variables: {}", e)))?;
                state.calls.push((operation, recorded));
                state.responses.pop_front()
            };
            let data = queued
                .ok_or_else(|| RelayError::Transport("No mock response queued".to_string()))??;
            return serde_json::from_value(data)
                .map_err(|e| RelayError::Transport(format!("Failed to decode response: {}", e)));
        }

        // Config is a per-call precondition: fail before any network I/O.
        let endpoint = self.endpoint()?;
        let token = self.access_token()?;
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| RelayError::Transport("No HTTP client".to_string()))?;

        debug!("Calling Shopify Admin API: {}", operation);

        let request = GraphQlRequest { query, variables };
        let response = client
            .post(&endpoint)
            .header("X-Shopify-Access-Token", token)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(format!("Failed to read response: {}", e)))?;

        let parsed: GraphQlResponse<D> = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => {
                return Err(RelayError::Transport(format!(
                    "Failed to parse response: {}",
                    e
                )));
            }
            // Non-2xx with an unreadable body: report the status line.
            Err(_) => {
                return Err(RelayError::Api(
                    status.canonical_reason().unwrap_or(status.as_str()).to_string(),
                ));
            }
        };

        if !status.is_success() {
            let message = parsed
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or(status.as_str()).to_string()
                });
            return Err(RelayError::Api(message));
        }

        if let Some(first) = parsed.errors.first() {
            return Err(RelayError::Api(first.message.clone()));
        }

        parsed
            .data
            .ok_or_else(|| RelayError::Transport("Response missing data object".to_string()))
    }

    /// Look up the product's first variant in platform-defined order.
    ///
    /// Returns `Ok(None)` when the product is unknown or has zero variants.
    pub async fn default_variant_id(
        &self,
        product_gid: &str,
    ) -> Result<Option<String>, RelayError> {
        let data: DefaultVariantData = self
            .graphql(
                "GetDefaultVariant",
                DEFAULT_VARIANT_QUERY,
                DefaultVariantVariables { id: product_gid },
            )
            .await?;

        Ok(data
            .product
            .and_then(|p| p.variants.edges.into_iter().next())
            .map(|edge| edge.node.id))
    }

    /// Submit the `orderCreate` mutation.
    pub async fn order_create(
        &self,
        order: OrderCreateInput,
    ) -> Result<OrderCreatePayload, RelayError> {
        let data: OrderCreateData = self
            .graphql(
                "CreateOrder",
                ORDER_CREATE_MUTATION,
                OrderCreateVariables { order },
            )
            .await?;

        Ok(data.order_create)
    }
}
