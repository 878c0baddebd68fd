//! Main TrafikverketClient

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::Response;
use crate::Settings;
use crate::error::ApiError;
use crate::error::Error;
use crate::query::Request;
use crate::query::Tag;

/// The data endpoint of the Trafikverket open API.
pub const API_URL: &str = "https://api.trafikinfo.trafikverket.se/v2/data.json";

/// Blocking client for the Trafikverket open API.
///
/// Each call serializes one request and sends it with a single HTTP POST.
/// Nothing is retried; wrap the calls if you need that.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads. It is built on reqwest's blocking client, so it must not
/// be used from within an async runtime.
///
/// # Example
///
/// ```ignore
/// use trafikverket_lib::query::{opt, Tag};
/// use trafikverket_lib::TrafikverketClient;
///
/// let client = TrafikverketClient::builder()
///     .api_key("my-key")
///     .build()?;
///
/// let response = client.execute(
///     Tag::query()
///         .opt(opt::OBJECT_TYPE, "TrainStation")
///         .opt(opt::SCHEMA_VERSION, "1.4"),
/// )?;
/// println!("{}", response.text());
/// ```
#[derive(Clone)]
pub struct TrafikverketClient {
    inner: Arc<TrafikverketClientInner>,
}

struct TrafikverketClientInner {
    api_key: String,
    endpoint: Url,
    settings: Settings,
    http_client: Client,
}

impl TrafikverketClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> TrafikverketClientBuilder<Missing> {
        TrafikverketClientBuilder::new()
    }

    /// Wraps a query in a request carrying this client's key.
    pub fn request(&self, query: impl Into<Tag>) -> Request {
        Request::new(self.inner.api_key.as_str(), query)
    }

    /// Builds a request for `query` and sends it.
    pub fn execute(&self, query: impl Into<Tag>) -> Result<Response, Error> {
        self.send(&self.request(query))
    }

    /// Serializes and sends a request.
    ///
    /// With [`Settings::debug`] set, the serialized request is logged at
    /// `info` level before it is sent.
    pub fn send(&self, request: &Request) -> Result<Response, Error> {
        let xml = request.to_xml(&self.inner.settings)?;
        if self.inner.settings.debug {
            log::info!("request:\n{}", xml);
        }
        Ok(self.dispatch(xml)?)
    }

    /// POSTs an already serialized document as `text/xml`.
    ///
    /// Any status other than 200 is returned as [`ApiError::Http`] with the
    /// response body attached.
    pub fn dispatch(&self, xml: impl Into<String>) -> Result<Response, ApiError> {
        let xml = xml.into();
        log::debug!("POST {} ({} bytes)", self.inner.endpoint, xml.len());

        let response = self
            .inner
            .http_client
            .post(self.inner.endpoint.clone())
            .header(CONTENT_TYPE, "text/xml")
            .body(xml)
            .send()?;

        let status = response.status();
        let body = response.bytes()?.to_vec();
        log::trace!("{} answered {} ({} bytes)", self.inner.endpoint, status, body.len());

        if status != StatusCode::OK {
            return Err(ApiError::http(status.as_u16(), body));
        }
        Ok(Response::new(status.as_u16(), body))
    }

    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint.as_str()
    }

    /// Returns the settings used to serialize requests.
    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }
}

impl std::fmt::Debug for TrafikverketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafikverketClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("settings", &self.inner.settings)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`TrafikverketClient`].
///
/// Uses the typestate pattern to ensure the API key is set at compile time.
///
/// # Example
///
/// ```ignore
/// let client = TrafikverketClient::builder()
///     .api_key("my-key")
///     .settings(Settings::default().with_debug(true))
///     .build()?;
/// ```
pub struct TrafikverketClientBuilder<Key> {
    api_key: Key,
    endpoint: String,
    settings: Settings,
    http_client: Option<Client>,
}

impl TrafikverketClientBuilder<Missing> {
    /// Creates a new builder starting from [`Settings::global`].
    pub fn new() -> Self {
        Self {
            api_key: Missing,
            endpoint: API_URL.to_string(),
            settings: Settings::global(),
            http_client: None,
        }
    }

    /// Sets the authentication key sent in every `<LOGIN/>`.
    pub fn api_key(self, key: impl Into<String>) -> TrafikverketClientBuilder<Set<String>> {
        TrafikverketClientBuilder {
            api_key: Set(key.into()),
            endpoint: self.endpoint,
            settings: self.settings,
            http_client: self.http_client,
        }
    }
}

impl Default for TrafikverketClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TrafikverketClientBuilder<K> {
    /// Overrides the endpoint URL.
    ///
    /// Defaults to [`API_URL`].
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Sets the serialization settings.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// Use this to put a deadline on requests. If not set, a default client
    /// is created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl TrafikverketClientBuilder<Set<String>> {
    /// Builds the [`TrafikverketClient`].
    ///
    /// This method is only available once `api_key` has been set.
    pub fn build(self) -> Result<TrafikverketClient, ApiError> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.endpoint, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        Ok(TrafikverketClient {
            inner: Arc::new(TrafikverketClientInner {
                api_key: self.api_key.0,
                endpoint,
                settings: self.settings,
                http_client,
            }),
        })
    }
}
