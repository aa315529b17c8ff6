//! Response decoding for the LiveChat wire format.
//!
//! The platform declares its payload shape through the `Content-Type` header
//! and signals failures with a top-level `errors` field rather than through
//! HTTP status codes alone. This module turns a raw body into a
//! [`ResponseBody`] and performs the `errors`-field check that every
//! operation shares.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{RemoteError, ValidationError};

/// A decoded HTTP response body.
///
/// Decoding is driven entirely by the declared `Content-Type`, the same way
/// for every request method: bodies declared as JSON are parsed into a
/// [`Value`], everything else is kept as raw text together with the content
/// type it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The response declared `application/json` and parsed successfully.
    Json(Value),
    /// Any non-JSON response, kept verbatim.
    Text {
        /// The declared content type, if any.
        content_type: Option<String>,
        /// The raw body text.
        body: String,
    },
}

impl ResponseBody {
    /// Decodes a body according to its declared content type.
    ///
    /// The JSON branch is taken when the `Content-Type` value contains
    /// `application/json` (case-insensitive), which also covers
    /// parameterized forms such as `application/json; charset=utf-8`.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::Json`] when a body declared as JSON does
    /// not parse.
    pub fn decode(content_type: Option<&str>, body: String) -> Result<Self, ValidationError> {
        let is_json = content_type
            .is_some_and(|value| value.to_ascii_lowercase().contains("application/json"));

        if is_json {
            let value = serde_json::from_str(&body)?;
            Ok(Self::Json(value))
        } else {
            Ok(Self::Text {
                content_type: content_type.map(str::to_owned),
                body,
            })
        }
    }

    /// Fails the call when the payload carries a remote-reported error.
    ///
    /// LiveChat reports failures through a top-level `errors` field, on
    /// success statuses as much as on error statuses. A JSON body whose
    /// `errors` field is present and non-null therefore converts into a
    /// [`RemoteError`] carrying the full payload and the HTTP status it
    /// arrived with; a literal `errors: null` counts as absent.
    pub fn check_remote_errors(self, status: u16) -> Result<Self, RemoteError> {
        match self {
            Self::Json(payload)
                if payload.get("errors").is_some_and(|errors| !errors.is_null()) =>
            {
                Err(RemoteError { status, payload })
            }
            other => Ok(other),
        }
    }

    /// Deserializes a JSON body into a typed value.
    ///
    /// ## Errors
    ///
    /// - [`ValidationError::UnexpectedContentType`] when the response was
    ///   not declared as JSON.
    /// - [`ValidationError::Json`] when the payload does not match `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ValidationError> {
        match self {
            Self::Json(value) => Ok(serde_json::from_value(value)?),
            Self::Text { content_type, .. } => Err(ValidationError::UnexpectedContentType {
                content_type: content_type.unwrap_or_else(|| "<none>".to_owned()),
            }),
        }
    }

    /// The parsed JSON payload, when the body was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text { .. } => None,
        }
    }
}
