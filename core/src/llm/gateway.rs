use async_trait::async_trait;

/// Failure of a single completion call.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The service answered with a non-success status. `body` is the raw
    /// response text, forwarded to the caller unchanged.
    #[error("completion service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("completion service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// Outbound seam to the completion service. One call per invocation, no
/// retries and no caching.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
