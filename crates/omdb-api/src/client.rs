//! `OmdbClient` - OMDb API client implementation.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::api::LocalOmdbApi;
use crate::envelope::{ResponseEnvelope, ResponseShape, classify};
use crate::error::OmdbError;
use crate::params::{SearchParams, TitleLookupParams};
use crate::types::{OmdbSearchPage, TitleLookup};

/// Default base URL for the OMDb API.
const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb API client.
///
/// Issues exactly one GET request per call; no retries, no internal
/// locking. Concurrent callers share no mutable state.
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key, attached as the `apikey` query parameter.
    api_key: String,
}

// The credential must never be echoed, so Debug is written by hand.
impl fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Builder for `OmdbClient`.
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl fmt::Debug for OmdbClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a request timeout, forwarded to the HTTP client
    /// (default: none).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<OmdbClient> {
        let api_key = self.api_key.context("api_key is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let mut client_builder = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let http_client = client_builder
            .build()
            .context("failed to build HTTP client")?;

        Ok(OmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl OmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> OmdbClientBuilder {
        OmdbClientBuilder::new()
    }

    /// Issues the GET request for a prepared query and returns the body.
    ///
    /// The credential is attached after the log line so the key never
    /// reaches a tracing event.
    async fn get_body(&self, mut query: Vec<(&'static str, String)>) -> Result<String, OmdbError> {
        tracing::debug!(?query, "OMDb API request");
        query.push(("apikey", self.api_key.clone()));

        let response = self
            .http_client
            .get(self.base_url.clone())
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        tracing::debug!(body_len = body.len(), "Response body received");
        Ok(body)
    }

    /// Decodes a response body into one concrete shape.
    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, OmdbError> {
        serde_json::from_str(body).map_err(|e| OmdbError::MalformedResponse(e.to_string()))
    }

    /// Decodes a title-lookup body into the shape selected by
    /// classification.
    pub(crate) fn parse_title_response(
        params: &TitleLookupParams,
        body: &str,
    ) -> Result<TitleLookup, OmdbError> {
        let envelope: ResponseEnvelope = Self::decode(body)?;
        match classify(params, &envelope)? {
            ResponseShape::Season => Self::decode(body).map(TitleLookup::Season),
            ResponseShape::Episode => Self::decode(body).map(TitleLookup::Episode),
            ResponseShape::Series => Self::decode(body).map(TitleLookup::Series),
            ResponseShape::Movie => Self::decode(body).map(TitleLookup::Movie),
        }
    }

    /// Decodes a free-text search body.
    pub(crate) fn parse_search_response(body: &str) -> Result<OmdbSearchPage, OmdbError> {
        let envelope: ResponseEnvelope = Self::decode(body)?;
        if !envelope.is_success() {
            return Err(OmdbError::Api(envelope.error_message()));
        }
        Self::decode(body)
    }
}

impl LocalOmdbApi for OmdbClient {
    #[instrument(skip_all)]
    async fn search_by_title(
        &self,
        params: &TitleLookupParams,
    ) -> Result<TitleLookup, OmdbError> {
        let query = params.build_query()?;
        let body = self.get_body(query).await?;
        Self::parse_title_response(params, &body)
    }

    #[instrument(skip_all)]
    async fn search(&self, params: &SearchParams) -> Result<OmdbSearchPage, OmdbError> {
        let body = self.get_body(params.build_query()).await?;
        Self::parse_search_response(&body)
    }
}
