use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder as ReqwestRequestBuilder, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    config::{self, OllamaConfig},
    error::{self, OllamaRequestError},
};

/// HTTP method for API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }
}

/// A logical API target, resolved against the configured base URL at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    /// Per-call bound that replaces the client's total timeout for this request.
    pub timeout: Option<Duration>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
            timeout: None,
        }
    }

    /// `GET /`, the cheapest request the server answers.
    pub fn root() -> Self {
        Self::new("", HttpMethod::Get)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Turns [`Endpoint`]s into transport-ready requests and executes them.
///
/// Holds the transport session and a shared, read-only configuration; building
/// a request never writes to either.
#[derive(Clone)]
pub struct RequestBuilder {
    client: reqwest::Client,
    config: Arc<OllamaConfig>,
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RequestBuilder {
    pub fn new(client: reqwest::Client, config: Arc<OllamaConfig>) -> Self {
        Self { client, config }
    }

    /// Resolve `endpoint` against the base URL, joined by exactly one `/`.
    ///
    /// # Errors
    ///
    /// Returns [`OllamaRequestError::InvalidBaseUrl`] if the joined URL does
    /// not parse.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, OllamaRequestError> {
        let url = format!(
            "{}/{}",
            self.config.base_url().trim_end_matches('/'),
            endpoint.path.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }

    /// Build a reqwest `RequestBuilder` for the given endpoint
    ///
    /// # Errors
    ///
    /// Returns [`OllamaRequestError::InvalidBaseUrl`] if the target URL is not
    /// a valid absolute URL.
    pub fn build_request(
        &self,
        endpoint: &Endpoint,
    ) -> Result<ReqwestRequestBuilder, OllamaRequestError> {
        let url = self.url_for(endpoint)?;
        let method: Method = endpoint.method.into();
        log::trace!("{method} {}", config::strip_userinfo(url.as_str()));

        let mut req = self.client.request(method, url);

        if let Some(token) = self.config.bearer_token() {
            req = req.bearer_auth(token);
        }

        if let Some(timeout) = endpoint.timeout {
            req = req.timeout(timeout);
        }

        Ok(req)
    }

    /// Execute a request and only check that the status is a success
    ///
    /// # Errors
    ///
    /// Transport failures, timeouts and non-2xx statuses.
    pub async fn request_unit(&self, endpoint: &Endpoint) -> Result<(), OllamaRequestError> {
        let req = self.build_request(endpoint)?;
        let res = req.send().await?;

        if res.status().is_success() {
            Ok(())
        } else {
            let status = res.status();
            let bytes = res.bytes().await?;
            Err(error::parse_error_response(status, &bytes))
        }
    }

    /// Execute a request with an optional JSON body and decode a JSON response
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses and bodies that do not decode into `T`.
    pub async fn request_json<T, B>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<T, OllamaRequestError>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize + ?Sized,
    {
        let mut req = self.build_request(endpoint)?;

        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await?;
        Self::handle_response(res).await
    }

    /// Decode a success body or turn a failure status into an API error
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        res: Response,
    ) -> Result<T, OllamaRequestError> {
        let status = res.status();
        let bytes = res.bytes().await?;

        if status.is_success() {
            serde_json::from_slice::<T>(&bytes).map_err(|source| OllamaRequestError::Decode {
                status: status.as_u16(),
                source,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        } else {
            Err(error::parse_error_response(status, &bytes))
        }
    }
}
