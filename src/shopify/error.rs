use thiserror::Error;

/// Failures on the relay-to-Shopify path.
///
/// Deliberately flat: every variant maps to a server-error response. Input
/// validation failures and upstream `userErrors` never become a `RelayError`;
/// the handler maps those to client-error responses directly.
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    /// Store domain or admin token absent. Checked before any network I/O.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    /// Non-2xx status or top-level GraphQL `errors` from the Admin API.
    #[error("Shopify API error: {0}")]
    Api(String),

    /// Network failure or a response body we could not decode.
    #[error("transport error: {0}")]
    Transport(String),
}
