//! Scripted provider for deterministic tests.

use std::future::Future;
use std::sync::Mutex;

use tokio::sync::oneshot;

use super::{ImageProvider, ProviderError};

type FetchResult = Result<Vec<String>, ProviderError>;

enum Scripted {
    Ready(FetchResult),
    Gated(oneshot::Receiver<FetchResult>),
}

/// Provider answering each query from a per-query script.
///
/// Answers are matched by query so the order in which fetch tasks start does
/// not matter. Unscripted calls answer immediately with numbered URLs
/// derived from the query.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<Vec<(String, Scripted)>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self { Self::default() }

    /// Queues an immediate answer for the next call with `query`.
    pub fn push_ready(&self, query: &str, result: FetchResult) {
        self.script.lock().unwrap().push((query.to_string(), Scripted::Ready(result)));
    }

    /// Queues an answer for the next call with `query`, released by the
    /// returned sender.
    pub fn push_gated(&self, query: &str) -> oneshot::Sender<FetchResult> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push((query.to_string(), Scripted::Gated(rx)));
        tx
    }

    /// Queries received so far.
    pub fn calls(&self) -> Vec<String> { self.calls.lock().unwrap().clone() }

    /// Numbered URLs for a query, as returned for unscripted calls.
    pub fn urls_for(query: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("https://img.test/{}/{i}.jpg", query.replace(' ', "-"))).collect()
    }

    fn take(&self, query: &str) -> Option<Scripted> {
        let mut script = self.script.lock().unwrap();
        let index = script.iter().position(|(q, _)| q == query)?;
        Some(script.remove(index).1)
    }
}

impl ImageProvider for ScriptedProvider {
    fn fetch_images(
        &self,
        query: &str,
        count: usize,
    ) -> impl Future<Output = FetchResult> + Send {
        self.calls.lock().unwrap().push(query.to_string());
        let next = self.take(query);
        let fallback = Self::urls_for(query, count);

        async move {
            match next {
                Some(Scripted::Ready(result)) => result,
                Some(Scripted::Gated(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(ProviderError::Unavailable("gate dropped".to_string()))),
                None => Ok(fallback),
            }
        }
    }
}
