//! Client library for the LiveChat customer-support HTTP API.
//!
//! Wraps the v2-era agents/greetings surface: HTTP Basic authentication, a
//! fixed base URL, JSON requests and responses, and the platform's
//! convention of reporting failures through a top-level `errors` field
//! rather than through HTTP status codes alone.
//!
//! All operations are async and return layered errors: configuration
//! problems surface at construction, parameter problems before any request
//! is sent, and transport or remote failures from the exchange itself.
//!
//! ## Examples
//!
//! ```no_run
//! use livechat_client::{GreetingRule, LivechatClient, LivechatConfig, NewGreeting};
//!
//! # async fn run() -> Result<(), livechat_client::ApiError> {
//! let config = LivechatConfig::new("agent@example.com", "api-key")?;
//! let client = LivechatClient::new(config)?;
//!
//! let greeting = client
//!     .create_greeting(&NewGreeting::new(
//!         "Welcome",
//!         vec![GreetingRule::custom_variable("visits", "3", "greater_than")],
//!     ))
//!     .await?;
//!
//! let status = client.delete_greeting(greeting.id).await?;
//! assert!(status.ok);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod method;
pub mod response;
pub mod types;

pub use client::LivechatClient;
pub use config::{
    LivechatConfig, DEFAULT_API_VERSION, LIVECHAT_API_BASE_URL, LIVECHAT_API_KEY_ENV,
    LIVECHAT_LOGIN_ENV,
};
pub use error::{ApiError, ConfigError, RemoteError, TransportError, ValidationError};
pub use method::RestMethod;
pub use response::ResponseBody;
pub use types::{Agent, Greeting, GreetingRule, NewGreeting, StatusResponse};
