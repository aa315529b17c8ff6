use serde_json::Value;
use thiserror::Error;

/// The LiveChat service reported an error payload.
///
/// The platform signals failures with a JSON body carrying a top-level
/// `errors` field, independent of the HTTP status code. The full payload is
/// kept so callers can inspect the remote-reported reason.
#[derive(Debug, Error)]
#[error("LiveChat API reported an error (HTTP {status}): {payload}")]
pub struct RemoteError {
    /// HTTP status the payload arrived with.
    pub status: u16,
    /// The complete JSON body as received.
    pub payload: Value,
}

impl RemoteError {
    /// The top-level `errors` field of the payload, when present.
    pub fn errors(&self) -> Option<&Value> {
        self.payload.get("errors")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_includes_status_and_payload() {
        let err = RemoteError {
            status: 404,
            payload: json!({"errors": ["Resource not found"]}),
        };
        let display = err.to_string();
        assert!(display.contains("404"));
        assert!(display.contains("Resource not found"));
    }

    #[test]
    fn errors_accessor_returns_field() {
        let err = RemoteError {
            status: 200,
            payload: json!({"errors": ["Invalid API key"], "detail": "x"}),
        };
        assert_eq!(err.errors(), Some(&json!(["Invalid API key"])));
    }
}
