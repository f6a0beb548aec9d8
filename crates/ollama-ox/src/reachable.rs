use std::time::Duration;

use async_stream::stream;
use futures_util::stream::BoxStream;

use crate::{Ollama, error::OllamaRequestError};

impl Ollama {
    /// Check whether the server answers `GET /` with a success status.
    ///
    /// Bounded by the configured probe timeout (2 seconds unless overridden),
    /// not by the client's long request timeouts. Every failure, including a
    /// timeout, yields `false`.
    ///
    /// ```rust,no_run
    /// # async fn run() -> Result<(), ollama_ox::OllamaRequestError> {
    /// let ollama = ollama_ox::Ollama::new("http://localhost:11434")?;
    /// if !ollama.reachable().await {
    ///     eprintln!("start the server with `ollama serve`");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn reachable(&self) -> bool {
        self.reachable_within(self.config.probe_timeout()).await
    }

    /// [`Self::reachable`] with an explicit bound for this call only.
    ///
    /// Dropping the returned future aborts the in-flight request.
    pub async fn reachable_within(&self, timeout: Duration) -> bool {
        classify(self.request_helper().probe_root(Some(timeout)).await)
    }

    /// Reachability as a stream that yields exactly one value and ends.
    ///
    /// Unlike [`Self::reachable`] there is no short per-call bound: the probe
    /// waits as long as the client's request and resource timeouts allow.
    /// Failures are yielded as `false`, never as an error item. Dropping the
    /// stream before it yields aborts the in-flight request.
    pub fn reachable_stream(&self) -> BoxStream<'static, bool> {
        let helper = self.request_helper();

        Box::pin(stream! {
            yield classify(helper.probe_root(None).await);
        })
    }
}

/// The only place a probe failure is absorbed.
fn classify(outcome: Result<(), OllamaRequestError>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            log::debug!("ollama not reachable: {e}");
            false
        }
    }
}
