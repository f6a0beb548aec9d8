use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::OllamaConfig,
    error::OllamaRequestError,
    request::ShowModelRequest,
    request_builder::{Endpoint, HttpMethod, RequestBuilder},
    response::ModelInfoResponse,
};

/// Ollama endpoint helpers on top of the shared [`RequestBuilder`]
#[derive(Debug, Clone)]
pub(crate) struct OllamaRequestHelper {
    request_builder: RequestBuilder,
}

impl OllamaRequestHelper {
    pub(crate) fn new(client: reqwest::Client, config: Arc<OllamaConfig>) -> Self {
        Self {
            request_builder: RequestBuilder::new(client, config),
        }
    }

    /// `GET /`. `None` leaves the client's own timeouts in charge.
    pub(crate) async fn probe_root(
        &self,
        timeout: Option<Duration>,
    ) -> Result<(), OllamaRequestError> {
        let endpoint = match timeout {
            Some(timeout) => Endpoint::root().with_timeout(timeout),
            None => Endpoint::root(),
        };
        self.request_builder.request_unit(&endpoint).await
    }

    /// `POST /api/show`
    pub(crate) async fn show_model(
        &self,
        request: &ShowModelRequest,
    ) -> Result<ModelInfoResponse, OllamaRequestError> {
        let endpoint = Endpoint::new("api/show", HttpMethod::Post);
        self.request_builder
            .request_json(&endpoint, Some(request))
            .await
    }
}
