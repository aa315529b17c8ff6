//! Layered error types for the LiveChat client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all client operations
//! - [`ConfigError`] - Construction-time configuration errors
//! - [`ValidationError`] - Call-parameter and response-shape errors
//! - [`TransportError`] - Network and HTTP transport errors
//! - [`RemoteError`] - Errors reported by the LiveChat service itself

mod api_error;
mod config_error;
mod remote_error;
mod transport_error;
mod validation_error;

pub use api_error::ApiError;
pub use config_error::ConfigError;
pub use remote_error::RemoteError;
pub use transport_error::TransportError;
pub use validation_error::ValidationError;
