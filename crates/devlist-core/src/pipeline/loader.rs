//! Background loads with single-shot completion.

use std::sync::Arc;
use tokio::task::{AbortHandle, JoinError, JoinHandle};

use super::Pipeline;
use crate::fetch::{FetchError, Fetcher};
use crate::record::Record;

type LoadResult = Result<Vec<Record>, FetchError>;

/// Runs [`Pipeline::load`] on a blocking worker, one task per request.
///
/// Must be used from within a tokio runtime. Concurrent loads are independent;
/// starting a new one does not cancel an earlier one.
pub struct Loader<F> {
    pipeline: Arc<Pipeline<F>>,
}

impl<F> Clone for Loader<F> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

impl<F: Fetcher + 'static> Loader<F> {
    pub fn new(pipeline: Pipeline<F>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Start a load and return immediately.
    pub fn spawn(&self, url: &str) -> LoadHandle {
        let pipeline = Arc::clone(&self.pipeline);
        let url = url.to_string();
        let task = tokio::spawn(async move {
            tokio::task::spawn_blocking(move || pipeline.load(&url)).await
        });
        LoadHandle { task }
    }

    /// Start a load and deliver its outcome to `on_finished`, exactly once.
    ///
    /// Aborting through the returned handle, or shutting the runtime down while
    /// the load is pending, delivers [`FetchError::Interrupted`].
    pub fn load_with<C>(&self, url: &str, on_finished: C) -> AbortHandle
    where
        C: FnOnce(LoadResult) + Send + 'static,
    {
        let handle = self.spawn(url);
        let abort = handle.abort_handle();
        let completion = Completion::new(on_finished);
        tokio::spawn(async move { completion.finish(handle.wait().await) });
        abort
    }

    /// Load on the worker and wait for the outcome.
    pub async fn load(&self, url: &str) -> LoadResult {
        self.spawn(url).wait().await
    }
}

/// Pending load started by [`Loader::spawn`].
pub struct LoadHandle {
    task: JoinHandle<Result<LoadResult, JoinError>>,
}

impl LoadHandle {
    /// Tear the load down. The in-flight request still runs until it finishes
    /// or times out, but its result is dropped.
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.task.abort_handle()
    }

    /// Wait for the single outcome of this load.
    pub async fn wait(self) -> LoadResult {
        match self.task.await {
            Ok(Ok(result)) => result,
            Ok(Err(join)) | Err(join) => Err(interrupted(join)),
        }
    }
}

/// Callback that runs once: with the load outcome, or with `Interrupted` if
/// dropped unfinished (e.g. its task was discarded at runtime shutdown).
struct Completion<C: FnOnce(LoadResult)> {
    on_finished: Option<C>,
}

impl<C: FnOnce(LoadResult)> Completion<C> {
    fn new(on_finished: C) -> Self {
        Self {
            on_finished: Some(on_finished),
        }
    }

    fn finish(mut self, result: LoadResult) {
        if let Some(on_finished) = self.on_finished.take() {
            on_finished(result);
        }
    }
}

impl<C: FnOnce(LoadResult)> Drop for Completion<C> {
    fn drop(&mut self) {
        if let Some(on_finished) = self.on_finished.take() {
            tracing::debug!("load dropped before completion");
            on_finished(Err(FetchError::Interrupted));
        }
    }
}

fn interrupted(e: JoinError) -> FetchError {
    if e.is_panic() {
        tracing::error!("load worker panicked: {}", e);
    } else {
        tracing::debug!("load task cancelled before completion");
    }
    FetchError::Interrupted
}
