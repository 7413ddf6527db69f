//! Script-loading collaborator
//!
//! SDK-backed providers need a remote vendor script to be present before
//! their calls work. The host supplies the actual loading mechanism behind
//! [`ScriptLoader`]; [`CachingScriptLoader`] guarantees at-most-once loading
//! per script id, with concurrent callers awaiting the same load.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

/// Host-supplied service that fetches a remote script and completes once it
/// is available. "Not yet loaded" is a valid state for consumers, not an
/// error.
#[async_trait]
pub trait ScriptLoader: Send + Sync {
    async fn load(&self, id: &str, url: &str) -> Result<()>;
}

/// Decorator enforcing one load per script id.
///
/// The first caller for an id runs the inner loader; everyone else awaits
/// that same completion. The outcome (success or failure) is cached for the
/// lifetime of this loader.
pub struct CachingScriptLoader<L> {
    inner: L,
    loads: Mutex<HashMap<String, Arc<OnceCell<std::result::Result<(), String>>>>>,
}

impl<L: ScriptLoader> CachingScriptLoader<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            loads: Mutex::new(HashMap::new()),
        }
    }

    async fn cell_for(&self, id: &str) -> Arc<OnceCell<std::result::Result<(), String>>> {
        let mut loads = self.loads.lock().await;
        loads.entry(id.to_string()).or_default().clone()
    }
}

#[async_trait]
impl<L: ScriptLoader> ScriptLoader for CachingScriptLoader<L> {
    async fn load(&self, id: &str, url: &str) -> Result<()> {
        let cell = self.cell_for(id).await;
        let outcome = cell
            .get_or_init(|| async {
                debug!("loading script '{}' from {}", id, url);
                self.inner.load(id, url).await.map_err(|e| e.to_string())
            })
            .await;

        outcome
            .clone()
            .map_err(|msg| Error::NotReady(format!("script '{}' failed to load: {}", id, msg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLoader {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ScriptLoader for CountingLoader {
        async fn load(&self, _id: &str, _url: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_loads_once_per_id() {
        let loader = Arc::new(CachingScriptLoader::new(CountingLoader {
            calls: AtomicUsize::new(0),
        }));

        for _ in 0..3 {
            loader.load("places", "https://example.test/sdk.js").await.unwrap();
        }
        loader.load("geocoder", "https://example.test/geo.js").await.unwrap();

        assert_eq!(loader.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_load() {
        let loader = Arc::new(CachingScriptLoader::new(CountingLoader {
            calls: AtomicUsize::new(0),
        }));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let loader = loader.clone();
                tokio::spawn(async move {
                    loader.load("places", "https://example.test/sdk.js").await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(loader.inner.calls.load(Ordering::SeqCst), 1);
    }

    struct FailingLoader;

    #[async_trait]
    impl ScriptLoader for FailingLoader {
        async fn load(&self, _id: &str, _url: &str) -> Result<()> {
            Err(Error::Configuration("dns down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failure_is_cached_and_reported_as_not_ready() {
        let loader = CachingScriptLoader::new(FailingLoader);

        let first = loader.load("places", "https://example.test/sdk.js").await;
        let second = loader.load("places", "https://example.test/sdk.js").await;

        assert!(matches!(first, Err(Error::NotReady(_))));
        assert!(matches!(second, Err(Error::NotReady(_))));
    }
}
