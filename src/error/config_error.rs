use thiserror::Error;

/// Errors raised while building a configuration or the client itself.
///
/// These are fatal: they surface before any network activity, and the only
/// recovery is constructing the configuration correctly.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The username (LiveChat account login) was empty or whitespace.
    #[error("username (LiveChat login) must not be empty")]
    EmptyUsername,

    /// The password (LiveChat API key) was empty or whitespace.
    #[error("password (LiveChat API key) must not be empty")]
    EmptyPassword,

    /// Credentials were requested from the environment but not found.
    #[error("missing LiveChat credentials: set {}", env_vars.join(", "))]
    MissingEnv { env_vars: Vec<String> },

    /// The base URL override did not parse.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },

    /// The base URL parsed but cannot carry endpoint path segments
    /// (for example a `mailto:` URL).
    #[error("base URL '{url}' cannot be a base for endpoint paths")]
    BaseUrlCannotBeABase { url: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    HttpClient { source: reqwest::Error },
}
