#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Ollama API client for Rust
//!
//! Wraps base URL, bearer authentication and timeouts behind a small client and
//! answers whether the server is currently reachable, either as a single
//! awaited call or as a one-shot stream.
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use ollama_ox::Ollama;
//!
//! # async fn run() -> Result<(), ollama_ox::OllamaRequestError> {
//! let ollama = Ollama::new("http://localhost:11434")?;
//!
//! let fast = ollama.reachable().await;
//! let patient = ollama.reachable_stream().next().await.unwrap_or(false);
//! # let _ = (fast, patient);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod internal;
mod reachable;
pub mod request;
pub mod request_builder;
pub mod response;

// Re-export main types
pub use config::OllamaConfig;
pub use error::OllamaRequestError;
pub use request::ShowModelRequest;
pub use response::{ModelDetails, ModelInfoResponse};

use core::fmt;
use std::sync::Arc;

use crate::internal::OllamaRequestHelper;

/// Ollama API client.
///
/// Cheap to clone; clones share one connection pool and one configuration.
#[derive(Clone)]
pub struct Ollama {
    pub(crate) config: Arc<OllamaConfig>,
    pub(crate) client: reqwest::Client,
}

impl Ollama {
    /// Create a client for `base_url` with default timeouts and no token.
    ///
    /// # Errors
    ///
    /// Returns [`OllamaRequestError::Http`] if the HTTP transport cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, OllamaRequestError> {
        Self::from_config(OllamaConfig::new(base_url))
    }

    /// Create a client from a full configuration. No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`OllamaRequestError::Http`] if the HTTP transport cannot be
    /// initialized.
    pub fn from_config(config: OllamaConfig) -> Result<Self, OllamaRequestError> {
        let client = config.build_http_client()?;
        log::debug!("ollama client for {}", config.loggable_base_url());

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Create a client from `OLLAMA_HOST` and `OLLAMA_API_KEY`.
    ///
    /// # Errors
    ///
    /// See [`OllamaConfig::from_env`] and [`Self::from_config`].
    pub fn load_from_env() -> Result<Self, OllamaRequestError> {
        Self::from_config(OllamaConfig::from_env()?)
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> OllamaRequestHelper {
        OllamaRequestHelper::new(self.client.clone(), Arc::clone(&self.config))
    }

    /// Show information about a model (`POST /api/show`).
    ///
    /// # Errors
    ///
    /// Transport failures, [`OllamaRequestError::Api`] for non-2xx statuses
    /// (e.g. unknown model), and [`OllamaRequestError::Decode`] when the body
    /// lacks `parameters` or `template`.
    pub async fn model_info(
        &self,
        request: &ShowModelRequest,
    ) -> Result<ModelInfoResponse, OllamaRequestError> {
        self.request_helper().show_model(request).await
    }
}

impl fmt::Debug for Ollama {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ollama")
            .field("config", &self.config)
            .field("client", &self.client)
            .finish()
    }
}
