use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "default-client")]
use arc_swap::ArcSwap;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use log::{debug, warn};
#[cfg(feature = "default-client")]
use once_cell::sync::Lazy;
use reqwest::{Client as ReqwestClient, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::device_configurations::DeviceConfigurationsApi;
use crate::api::enrollment_profiles::EnrollmentProfilesApi;
use crate::api::QueryParameters;
use crate::models::{CollectionResponse, ODataError};
use crate::serialization::{parse_json, serialize_to_json, Parsable, ParsableFactory};
use crate::{GraphError, GraphResult};

/// Service root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/beta";

const DEFAULT_USER_AGENT: &str = concat!("graph-models/", env!("CARGO_PKG_VERSION"));

#[cfg(feature = "default-client")]
static GRAPH_CLIENT: Lazy<ArcSwap<GraphClient>> = Lazy::new(|| {
    // Unauthenticated until `initialize` is called.
    ArcSwap::new(Arc::new(GraphClient::default()))
});

/// Initializes the static GraphClient instance. This should be called once
/// at the beginning of your application.
#[cfg(feature = "default-client")]
pub fn initialize(client: GraphClient) {
    GRAPH_CLIENT.store(Arc::new(client));
}

/// Returns the static GraphClient instance.
///
/// If it hasn't been previously initialized it returns a default instance
/// with an empty access token, whose requests the service will reject.
#[cfg(feature = "default-client")]
pub fn instance() -> Arc<GraphClient> {
    GRAPH_CLIENT.load_full()
}

/// Builder for [`GraphClient`].
///
/// Settings are validated when [`build`](Self::build) is called.
#[derive(Default)]
pub struct GraphClientBuilder {
    base_url: Option<String>,
    access_token: Option<SecretString>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl GraphClientBuilder {
    /// Sets the service root, e.g. `https://graph.microsoft.com/beta`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the OAuth bearer token sent with every request.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    /// The timeout and user agent settings are not applied to it.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> GraphResult<GraphClient> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let access_token = self
            .access_token
            .filter(|token| !token.expose_secret().trim().is_empty())
            .ok_or_else(|| GraphError::ConfigurationError("Access token is required".into()))?;

        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base_url)
            .map_err(|e| GraphError::ConfigurationError(format!("Invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(GraphError::ConfigurationError(format!(
                "Base URL must be an http(s) URL: {base_url}"
            )));
        }

        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

        let http_client = match self.http_client {
            Some(custom_client) => custom_client,
            None => ReqwestClient::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    GraphError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?,
        };

        Ok(GraphClient {
            base_url,
            access_token: Arc::new(access_token),
            timeout,
            user_agent: self.user_agent,
            http_client,
        })
    }
}

/// Async client for the Graph device-management API.
///
/// Cloning is cheap: clones share the connection pool and the access token.
#[derive(Clone)]
pub struct GraphClient {
    base_url: Url,
    access_token: Arc<SecretString>,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: ReqwestClient,
}

impl Default for GraphClient {
    fn default() -> Self {
        GraphClient {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Failed to parse default URL"),
            access_token: Arc::new(SecretString::from(String::new())),
            timeout: Duration::from_secs(30),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            http_client: ReqwestClient::new(),
        }
    }
}

impl fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GraphClient {
    pub fn builder() -> GraphClientBuilder {
        GraphClientBuilder::default()
    }

    /// The service root every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Device configuration profiles under `/deviceManagement`.
    pub fn device_configurations(&self) -> DeviceConfigurationsApi<'_> {
        DeviceConfigurationsApi::new(self)
    }

    /// Enrollment profiles of one DEP onboarding setting.
    pub fn enrollment_profiles<'a>(&'a self, dep_onboarding_setting_id: &'a str) -> EnrollmentProfilesApi<'a> {
        EnrollmentProfilesApi::new(self, dep_onboarding_setting_id)
    }

    /// Makes a raw request to the Graph API.
    ///
    /// # Warning
    ///
    /// This is an advanced API that bypasses the typed models. Use the typed
    /// handlers (like `device_configurations()`) when possible.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method to use (e.g., "GET", "PATCH").
    /// * `endpoint` - Path relative to the base URL (e.g.,
    ///   "/deviceManagement/deviceCompliancePolicies"). Query strings and
    ///   fragments are not accepted.
    /// * `body` - Optional request body (must implement `Serialize`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The method or endpoint is invalid.
    /// - The request fails due to network issues.
    /// - The API returns an error response.
    /// - The response body is not JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use graph_models::{GraphClient, GraphError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), GraphError> {
    /// let client = GraphClient::builder().access_token("eyJ0eXAi...").build()?;
    ///
    /// let settings = client
    ///     .raw_request("GET", "/deviceManagement/depOnboardingSettings", None::<()>)
    ///     .await?;
    /// println!("{settings}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request<T>(&self, method: &str, endpoint: &str, body: Option<T>) -> GraphResult<Value>
    where
        T: Serialize,
    {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| GraphError::ConfigurationError(format!("Invalid HTTP method: {method}")))?;
        let url = self.endpoint_url(endpoint, None)?;
        let body = body.map(|data| serde_json::to_vec(&data)).transpose()?;

        let response = self.send(method, url, body).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Resolves `endpoint` against the base URL.
    pub(crate) fn endpoint_url(&self, endpoint: &str, query: Option<&QueryParameters>) -> GraphResult<Url> {
        if endpoint.contains(['?', '#']) {
            return Err(GraphError::InvalidEndpoint(endpoint.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GraphError::InvalidEndpoint(endpoint.to_string()))?
            .pop_if_empty()
            .extend(endpoint.split('/').filter(|segment| !segment.is_empty()));

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.query_pairs_mut().extend_pairs(query.to_pairs());
        }
        Ok(url)
    }

    pub(crate) async fn get<T: Parsable>(
        &self,
        endpoint: &str,
        query: Option<&QueryParameters>,
        factory: ParsableFactory<T>,
    ) -> GraphResult<T> {
        let url = self.endpoint_url(endpoint, query)?;
        let response = self.send(Method::GET, url, None).await?;
        parse_json(&response.bytes().await?, factory)
    }

    pub(crate) async fn get_page<T: Parsable>(
        &self,
        url: Url,
        factory: ParsableFactory<T>,
    ) -> GraphResult<CollectionResponse<T>> {
        let response = self.send(Method::GET, url, None).await?;
        CollectionResponse::parse(&response.bytes().await?, factory)
    }

    /// Fetches every page of a collection by following `@odata.nextLink`.
    pub(crate) async fn get_all_pages<T: Parsable>(
        &self,
        endpoint: &str,
        query: Option<&QueryParameters>,
        factory: ParsableFactory<T>,
    ) -> GraphResult<Vec<T>> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(self.endpoint_url(endpoint, query)?);

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                warn!("next link {url} was already fetched, stopping");
                break;
            }
            let page = self.get_page(url, factory).await?;
            debug!("received page of {} items", page.value.len());
            items.extend(page.value);
            next = match page.odata_next_link.as_deref() {
                Some(link) => Some(self.next_link_url(link)?),
                None => None,
            };
        }
        Ok(items)
    }

    /// Parses an `@odata.nextLink`, which must stay on the origin of the base
    /// URL so the access token is never sent elsewhere.
    fn next_link_url(&self, link: &str) -> GraphResult<Url> {
        let url = Url::parse(link)?;
        let same_origin = url.scheme() == self.base_url.scheme()
            && url.host_str() == self.base_url.host_str()
            && url.port_or_known_default() == self.base_url.port_or_known_default();
        if !same_origin {
            warn!("refusing next link outside {}: {link}", self.base_url.origin().ascii_serialization());
            return Err(GraphError::InvalidEndpoint(link.to_string()));
        }
        Ok(url)
    }

    /// Sends `body` and decodes the response, if the service returned one.
    pub(crate) async fn send_parsable<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
        factory: ParsableFactory<T>,
    ) -> GraphResult<Option<T>>
    where
        B: Parsable + ?Sized,
        T: Parsable,
    {
        let url = self.endpoint_url(endpoint, None)?;
        let response = self.send(method, url, Some(serialize_to_json(body)?)).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        parse_json(&bytes, factory).map(Some)
    }

    pub(crate) async fn send_no_content(&self, method: Method, endpoint: &str) -> GraphResult<()> {
        let url = self.endpoint_url(endpoint, None)?;
        self.send(method, url, None).await?;
        Ok(())
    }

    async fn send(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> GraphResult<Response> {
        debug!("{method} {url}");

        let mut request = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token.expose_secret()))
            .header(ACCEPT, "application/json");

        if let Some(data) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(data);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("response status: {status}");

        if status.is_client_error() || status.is_server_error() {
            let bytes = response.bytes().await?;
            let (code, message) = match serde_json::from_slice::<ODataError>(&bytes) {
                Ok(envelope) => (envelope.error.code, envelope.error.message),
                Err(_) => (
                    status.canonical_reason().unwrap_or("Unknown").to_string(),
                    String::from_utf8_lossy(&bytes).into_owned(),
                ),
            };
            warn!("API request failed with status {status}: {code}: {message}");
            return Err(GraphError::ApiError {
                status: status.as_u16(),
                code,
                message,
            });
        }

        Ok(response)
    }
}
