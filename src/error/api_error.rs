use thiserror::Error;

use super::{ConfigError, RemoteError, TransportError, ValidationError};

/// Umbrella error returned by every [`LivechatClient`](crate::LivechatClient)
/// operation.
///
/// Each variant wraps one layer of the request lifecycle so callers can match
/// on the failure class without string inspection.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client construction or configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A request was rejected locally before anything was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with an error payload.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remote_error_converts_transparently() {
        let remote = RemoteError {
            status: 200,
            payload: json!({"errors": "bad things"}),
        };
        let wrapped = ApiError::from(remote);
        assert!(matches!(wrapped, ApiError::Remote(_)));
        assert!(wrapped.to_string().contains("bad things"));
    }

    #[test]
    fn validation_error_converts_transparently() {
        let wrapped = ApiError::from(ValidationError::EmptyGreetingId);
        assert!(matches!(wrapped, ApiError::Validation(_)));
        assert_eq!(wrapped.to_string(), "greeting id must not be empty");
    }
}
