//! Debounced search execution in front of a single provider

use crate::config::ServiceOptions;
use crate::providers::MapProvider;
use crate::results::{Suggestion, SuggestionList};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Search orchestrator wrapping exactly one provider.
///
/// Options are immutable per instance; a provider or option change means
/// constructing a new service. Each instance owns its debounce state
/// exclusively.
pub struct SearchService {
    provider: Arc<dyn MapProvider>,
    options: ServiceOptions,
    /// Monotonic request counter; a call that is no longer the newest when
    /// its debounce window elapses is superseded and never issued.
    generation: AtomicU64,
}

impl SearchService {
    pub fn new(provider: Arc<dyn MapProvider>, options: ServiceOptions) -> Self {
        Self {
            provider,
            options,
            generation: AtomicU64::new(0),
        }
    }

    pub fn options(&self) -> ServiceOptions {
        self.options
    }

    pub fn provider(&self) -> &Arc<dyn MapProvider> {
        &self.provider
    }

    /// Display label for a suggestion, delegated to the provider.
    pub fn suggestion_label(&self, suggestion: &Suggestion) -> String {
        self.provider.suggestion_label(suggestion)
    }

    /// Run a debounced search.
    ///
    /// Returns `None` when a newer call arrived during the debounce window:
    /// the superseded call never reaches the provider, which bounds outbound
    /// request volume to one per quiet period regardless of keystroke rate.
    /// A surviving call resolves `Some`:
    /// - trimmed input below the threshold yields an empty list with no
    ///   provider call;
    /// - provider errors are logged and absorbed into an empty list, never
    ///   propagated.
    pub async fn search(&self, text: &str) -> Option<SuggestionList> {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        sleep(Duration::from_millis(self.options.search_debounce_ms)).await;

        if self.generation.load(Ordering::SeqCst) != my_generation {
            debug!("search for {:?} superseded before issuance", text);
            return None;
        }

        let trimmed = text.trim();
        if trimmed.chars().count() < self.options.search_threshold {
            debug!(
                "search for {:?} below threshold {}, skipping provider",
                text, self.options.search_threshold
            );
            return Some(Vec::new());
        }

        match self.provider.search(trimmed).await {
            Ok(raw) => Some(self.provider.format_search_result(&raw)),
            Err(e) => {
                warn!("{} search failed: {}", self.provider.name(), e);
                Some(Vec::new())
            }
        }
    }
}
