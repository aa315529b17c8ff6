use thiserror::Error;

/// Network-level failures, propagated to the caller unchanged.
///
/// No retry or backoff is attempted; a failed round trip fails the call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP round trip failed (connection, DNS, timeout, or a body
    /// read error).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// An endpoint URL could not be assembled from the base URL.
    #[error("invalid request URL: {0}")]
    Url(String),
}
