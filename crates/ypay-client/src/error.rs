use thiserror::Error;

/// Errors returned by the Y-Pay merchant API client.
///
/// Every variant is terminal for the call that produced it; nothing here is
/// retried.
#[derive(Debug, Error)]
pub enum YpayError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network, DNS, TLS or connection failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status other than 200.
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// The API answered 200 but reported a non-zero `resultCode`.
    #[error("API error: {message}")]
    Api { code: Option<i64>, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Query parameters were rejected before any request was sent.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No service key was configured.
    #[error("no service key configured; set YPAY_API_KEY")]
    MissingServiceKey,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
