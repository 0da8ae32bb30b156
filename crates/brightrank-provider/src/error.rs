use thiserror::Error;

/// Errors returned by AI response providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("provider API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP 429. `retry_after_secs` carries the server's `Retry-After`
    /// delay when it sent one in seconds form.
    #[error("provider rate limited the request: {message}")]
    RateLimited {
        retry_after_secs: Option<u64>,
        message: String,
    },

    /// The API answered successfully but produced no text.
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// A JSON reply did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client could not be configured.
    #[error("invalid provider configuration: {0}")]
    Config(String),
}
