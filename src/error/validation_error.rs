use thiserror::Error;

/// Call-parameter and response-shape validation errors.
///
/// Parameter checks fail the call as a genuine `Err` before any request is
/// sent; response checks cover bodies that do not decode into the type an
/// endpoint promises.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A greeting id rendered to an empty or whitespace string.
    #[error("greeting id must not be empty")]
    EmptyGreetingId,

    /// A greeting payload serialized to JSON `null` or an empty object.
    #[error("greeting data must not be empty")]
    EmptyGreetingData,

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(serde_json::Error),

    /// A response declared as JSON did not parse, or parsed into a value
    /// that does not match the endpoint's result type.
    #[error("failed to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// An endpoint expected a JSON body but the response declared another
    /// content type.
    #[error("expected a JSON response but Content-Type was '{content_type}'")]
    UnexpectedContentType { content_type: String },
}
