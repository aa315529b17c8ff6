//! Client configuration for the LiveChat API.
//!
//! Credentials plus the small set of knobs the platform exposes: API
//! version, base URL, verbose wire logging, and request timeout. Every
//! default is a named constant here rather than a value buried in the
//! request path.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// LiveChat API base URL.
pub const LIVECHAT_API_BASE_URL: &str = "https://api.livechatinc.com";

/// API version requested via the `X-API-Version` header.
pub const DEFAULT_API_VERSION: u32 = 2;

/// Environment variable for the LiveChat login (username).
pub const LIVECHAT_LOGIN_ENV: &str = "LIVECHAT_LOGIN";

/// Environment variable for the LiveChat API key (password).
pub const LIVECHAT_API_KEY_ENV: &str = "LIVECHAT_API_KEY";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a [`LivechatClient`](crate::LivechatClient).
///
/// ## Examples
///
/// ```
/// use livechat_client::LivechatConfig;
///
/// let config = LivechatConfig::new("agent@example.com", "api-key")?;
/// assert_eq!(config.api_version(), 2);
/// assert_eq!(config.base_url().as_str(), "https://api.livechatinc.com/");
/// # Ok::<(), livechat_client::ConfigError>(())
/// ```
#[derive(Clone)]
pub struct LivechatConfig {
    username: String,
    password: String,
    api_version: u32,
    base_url: Url,
    debug: bool,
    timeout: Duration,
}

impl LivechatConfig {
    /// Creates a configuration from explicit credentials, with every other
    /// knob at its default.
    ///
    /// ## Arguments
    ///
    /// * `username` - The LiveChat login (email address).
    /// * `password` - The account's API key.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] or
    /// [`ConfigError::EmptyPassword`] when a credential is empty or only
    /// whitespace.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        if password.trim().is_empty() {
            return Err(ConfigError::EmptyPassword);
        }

        let base_url = Url::parse(LIVECHAT_API_BASE_URL).map_err(|source| {
            ConfigError::InvalidBaseUrl {
                url: LIVECHAT_API_BASE_URL.to_string(),
                source,
            }
        })?;

        Ok(Self {
            username,
            password,
            api_version: DEFAULT_API_VERSION,
            base_url,
            debug: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Creates a configuration from the `LIVECHAT_LOGIN` and
    /// `LIVECHAT_API_KEY` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] naming the variables when either
    /// is unset, empty, or only whitespace.
    pub fn from_env() -> Result<Self, ConfigError> {
        let missing = || ConfigError::MissingEnv {
            env_vars: vec![
                LIVECHAT_LOGIN_ENV.to_string(),
                LIVECHAT_API_KEY_ENV.to_string(),
            ],
        };

        let username = env::var(LIVECHAT_LOGIN_ENV).map_err(|_| missing())?;
        let password = env::var(LIVECHAT_API_KEY_ENV).map_err(|_| missing())?;
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(missing());
        }
        Self::new(username, password)
    }

    /// Replaces the base URL, e.g. to point at a test server.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the string does not
    /// parse as a URL, and [`ConfigError::BaseUrlCannotBeABase`] for URLs
    /// that cannot carry path segments (like `mailto:`).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::BaseUrlCannotBeABase {
                url: base_url.to_string(),
            });
        }
        self.base_url = parsed;
        Ok(self)
    }

    /// Requests a specific API version via the `X-API-Version` header.
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Turns on verbose wire logging (request and response bodies) in the
    /// dispatch trace.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured login.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The configured API key. Kept crate-private so it only flows into the
    /// Basic auth header.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// The API version sent with every request.
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether verbose wire logging is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Redacts the API key; config values routinely end up in logs.
impl fmt::Debug for LivechatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LivechatConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url.as_str())
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish()
    }
}
