//! Request execution with tracing instrumentation.
//!
//! Every API operation funnels through one dispatch routine that owns the
//! whole request lifecycle: URL assembly, Basic auth, the `X-API-Version`
//! header, body serialization, content-type-driven decoding, and the remote
//! `errors`-field check. The operations themselves stay thin wrappers over
//! it.

use std::fmt::Display;

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, Span};
use url::Url;

use crate::config::LivechatConfig;
use crate::error::{ApiError, ConfigError, TransportError, ValidationError};
use crate::method::RestMethod;
use crate::response::ResponseBody;
use crate::types::{Agent, Greeting, StatusResponse};

/// Header carrying the requested API version.
const API_VERSION_HEADER: &str = "X-API-Version";

/// Async client for the LiveChat agents/greetings API.
///
/// The client wraps `reqwest::Client` with connection pooling; cloning is
/// cheap and clones share the pool. Every operation authenticates with the
/// configured Basic credentials and requests the configured API version.
///
/// ## Examples
///
/// ```no_run
/// use livechat_client::{LivechatClient, LivechatConfig};
///
/// # async fn run() -> Result<(), livechat_client::ApiError> {
/// let config = LivechatConfig::new("agent@example.com", "api-key")?;
/// let client = LivechatClient::new(config)?;
///
/// for greeting in client.greetings().await? {
///     println!("{}: {}", greeting.id, greeting.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LivechatClient {
    client: reqwest::Client,
    config: LivechatConfig,
}

impl LivechatClient {
    /// Creates a client from a configuration.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying HTTP client
    /// cannot be constructed (e.g., TLS initialization failure).
    pub fn new(config: LivechatConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|source| ConfigError::HttpClient { source })?;

        Ok(Self { client, config })
    }

    /// Creates a client from the `LIVECHAT_LOGIN` and `LIVECHAT_API_KEY`
    /// environment variables.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] when either variable is unset or
    /// empty, and [`ConfigError::HttpClient`] when the HTTP client cannot
    /// be built.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(LivechatConfig::from_env()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &LivechatConfig {
        &self.config
    }

    /// Lists the agents on the account.
    ///
    /// Issues `GET /agents`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the request fails, the service reports an
    /// `errors` payload, or the response is not a JSON array of agents.
    pub async fn agents(&self) -> Result<Vec<Agent>, ApiError> {
        debug!("getting agents");
        let body = self.dispatch(RestMethod::Get, &["agents"], None).await?;
        Ok(body.into_json()?)
    }

    /// Lists the greetings configured on the account.
    ///
    /// Issues `GET /greetings`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the request fails, the service reports an
    /// `errors` payload, or the response is not a JSON array of greetings.
    pub async fn greetings(&self) -> Result<Vec<Greeting>, ApiError> {
        debug!("getting greetings");
        let body = self.dispatch(RestMethod::Get, &["greetings"], None).await?;
        Ok(body.into_json()?)
    }

    /// Fetches a single greeting.
    ///
    /// Issues `GET /greetings/{id}`. The id may be anything displayable
    /// (numeric ids included) and is percent-encoded into a single path
    /// segment.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::EmptyGreetingId`] without touching the
    /// network when the id renders empty, otherwise the usual dispatch
    /// errors.
    pub async fn greeting(&self, id: impl Display) -> Result<Greeting, ApiError> {
        let id = require_id(id)?;
        debug!(%id, "getting greeting");
        let body = self
            .dispatch(RestMethod::Get, &["greetings", id.as_str()], None)
            .await?;
        Ok(body.into_json()?)
    }

    /// Creates a greeting from any serializable payload.
    ///
    /// Issues `POST /greetings` with `data` as the JSON body. The typed
    /// convenience payload is [`NewGreeting`](crate::NewGreeting), but any
    /// `Serialize` value the service accepts works.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::EmptyGreetingData`] without touching the
    /// network when `data` serializes to JSON `null` or an empty object,
    /// otherwise the usual dispatch errors.
    pub async fn create_greeting<T>(&self, data: &T) -> Result<Greeting, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let payload = require_body(data)?;
        debug!("creating greeting");
        let body = self
            .dispatch(RestMethod::Post, &["greetings"], Some(payload))
            .await?;
        Ok(body.into_json()?)
    }

    /// Replaces a greeting.
    ///
    /// Issues `PUT /greetings/{id}` with `data` as the JSON body.
    ///
    /// ## Errors
    ///
    /// Same validation contract as [`greeting`](Self::greeting) and
    /// [`create_greeting`](Self::create_greeting), then the usual dispatch
    /// errors.
    pub async fn update_greeting<T>(&self, id: impl Display, data: &T) -> Result<Greeting, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let id = require_id(id)?;
        let payload = require_body(data)?;
        debug!(%id, "updating greeting");
        let body = self
            .dispatch(RestMethod::Put, &["greetings", id.as_str()], Some(payload))
            .await?;
        Ok(body.into_json()?)
    }

    /// Deletes a greeting.
    ///
    /// Issues `DELETE /greetings/{id}` and resolves with the service's
    /// acknowledgement body (`{ok: bool, ...}`).
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::EmptyGreetingId`] without touching the
    /// network when the id renders empty, otherwise the usual dispatch
    /// errors.
    pub async fn delete_greeting(&self, id: impl Display) -> Result<StatusResponse, ApiError> {
        let id = require_id(id)?;
        debug!(%id, "deleting greeting");
        let body = self
            .dispatch(RestMethod::Delete, &["greetings", id.as_str()], None)
            .await?;
        Ok(body.into_json()?)
    }

    /// Sends one request and decodes the response.
    ///
    /// The same path for every verb: resolve the endpoint URL, attach Basic
    /// auth and the version header, serialize the body for methods that
    /// carry one, decode by declared content type, then fail on a remote
    /// `errors` payload. With the config's `debug` flag set, request and
    /// response bodies are logged at debug level.
    #[instrument(
        name = "livechat_request",
        skip(self, method, segments, body),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn dispatch(
        &self,
        method: RestMethod,
        segments: &[&str],
        body: Option<Value>,
    ) -> Result<ResponseBody, ApiError> {
        Span::current().record("http.method", method.to_string().as_str());

        let url = self.endpoint_url(segments)?;
        Span::current().record("http.url", url.as_str());

        let mut request = self
            .client
            .request(method.to_reqwest(), url)
            .basic_auth(self.config.username(), Some(self.config.password()))
            .header(API_VERSION_HEADER, self.config.api_version().to_string());

        if method.has_body() {
            if let Some(payload) = &body {
                request = request.json(payload);
            }
        }

        if self.config.debug() {
            match &body {
                Some(payload) => debug!(request.body = %payload, "dispatching request"),
                None => debug!("dispatching request"),
            }
        }

        let response = request.send().await.map_err(TransportError::Request)?;

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let raw = response.text().await.map_err(TransportError::Request)?;
        if self.config.debug() {
            debug!(
                http.status_code = status,
                response.body = %raw,
                "response received"
            );
        }

        let decoded = ResponseBody::decode(content_type.as_deref(), raw)?;
        let checked = decoded.check_remote_errors(status).map_err(|err| {
            Span::current().record("otel.status_code", "ERROR");
            ApiError::Remote(err)
        })?;

        Span::current().record("otel.status_code", "OK");
        Ok(checked)
    }

    /// Resolves endpoint path segments against the configured base URL,
    /// percent-encoding each segment and preserving any path prefix the
    /// base URL carries.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.config.base_url().clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| TransportError::Url(self.config.base_url().to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

/// Renders an id and rejects empty or whitespace-only results before any
/// request is built.
fn require_id(id: impl Display) -> Result<String, ValidationError> {
    let rendered = id.to_string();
    let trimmed = rendered.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyGreetingId);
    }
    Ok(trimmed.to_owned())
}

/// Serializes a request payload and rejects ones with nothing in them
/// (JSON `null` or an empty object).
fn require_body<T>(data: &T) -> Result<Value, ValidationError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_value(data).map_err(ValidationError::Serialize)?;
    let empty = match &payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Err(ValidationError::EmptyGreetingData);
    }
    Ok(payload)
}
