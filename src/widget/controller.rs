//! Widget controller: state ownership and event wiring

use super::events::{ChangeEvent, SelectedSuggestion, WidgetEvent};
use crate::config::deprecation_warning;
use crate::results::SuggestionList;
use crate::service::SearchService;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Host callback receiving the uniform event protocol
pub type UpdateHandler = Arc<dyn Fn(WidgetEvent) + Send + Sync>;
/// Host callback receiving (possibly synthesized) input-change events
pub type ChangeHandler = Arc<dyn Fn(ChangeEvent) + Send + Sync>;
/// Deprecated post-fetch callback, superseded by the update protocol
pub type FetchCallback = Arc<dyn Fn(&SuggestionList) + Send + Sync>;
/// Deprecated selection callback, superseded by the update protocol
pub type SelectionCallback = Arc<dyn Fn(&SelectedSuggestion) + Send + Sync>;

/// Controller for one address field.
///
/// Owns the current suggestion list, wires keystrokes through the search
/// service, and resolves selections (optionally geocoding them) before
/// notifying the host. Presentation concerns (rendering, focus, keyboard
/// navigation) stay with the host.
///
/// Keystroke handling is non-exclusive: [`handle_input`] takes `&self`, so
/// each keystroke's future runs independently and the search service's
/// debounce gate decides which one reaches the provider. Hosts fire a new
/// `handle_input` per keystroke without awaiting the previous one.
///
/// [`handle_input`]: AddressWidget::handle_input
pub struct AddressWidget {
    /// Field name carried on synthesized change events
    name: String,
    service: SearchService,
    /// Current list, replaced wholesale by whichever search survives the
    /// debounce window
    suggestions: Arc<RwLock<SuggestionList>>,
    on_change: Option<ChangeHandler>,
    on_update: Option<UpdateHandler>,
    /// Whether a selection is geocoded into address parts before notifying
    resolve_address: bool,
    callback_on_fetch: Option<FetchCallback>,
    handle_suggestion_selection: Option<SelectionCallback>,
}

impl AddressWidget {
    pub fn new(name: impl Into<String>, service: SearchService) -> Self {
        Self {
            name: name.into(),
            service,
            suggestions: Arc::new(RwLock::new(Vec::new())),
            on_change: None,
            on_update: None,
            resolve_address: true,
            callback_on_fetch: None,
            handle_suggestion_selection: None,
        }
    }

    pub fn with_on_change(mut self, handler: ChangeHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    pub fn with_on_update(mut self, handler: UpdateHandler) -> Self {
        self.on_update = Some(handler);
        self
    }

    /// Disable the geocode-and-resolve step on selection.
    pub fn without_address_resolution(mut self) -> Self {
        self.resolve_address = false;
        self
    }

    /// Deprecated: use [`with_on_update`](Self::with_on_update) and observe
    /// `suggestions_change` events.
    pub fn with_callback_on_fetch(mut self, callback: FetchCallback) -> Self {
        deprecation_warning("callback_on_fetch", Some("on_update"));
        self.callback_on_fetch = Some(callback);
        self
    }

    /// Deprecated: use [`with_on_update`](Self::with_on_update) and observe
    /// `suggestions_select` events.
    pub fn with_handle_suggestion_selection(mut self, callback: SelectionCallback) -> Self {
        deprecation_warning("handle_suggestion_selection", Some("on_update"));
        self.handle_suggestion_selection = Some(callback);
        self
    }

    /// Current suggestion list, in provider response order
    pub fn suggestions(&self) -> SuggestionList {
        self.suggestions.read().unwrap().clone()
    }

    /// Display labels for the presentation layer, in list order
    pub fn suggestion_labels(&self) -> Vec<String> {
        self.suggestions
            .read()
            .unwrap()
            .iter()
            .map(|s| self.service.suggestion_label(s))
            .collect()
    }

    fn emit(&self, event: WidgetEvent) {
        if let Some(on_update) = &self.on_update {
            on_update(event);
        }
    }

    /// Handle an input change.
    ///
    /// Forwards the change to the host, runs the debounced search, and on a
    /// non-superseded resolution replaces the suggestion list wholesale and
    /// notifies the host. Superseded searches return without touching state,
    /// so under fast typing only the final keystroke's resolution lands.
    pub async fn handle_input(&self, value: &str) {
        if let Some(on_change) = &self.on_change {
            on_change(ChangeEvent {
                name: self.name.clone(),
                value: value.to_string(),
            });
        }
        self.emit(WidgetEvent::InputChange(value.to_string()));

        // The old list is stale as soon as a new search is triggered
        self.suggestions.write().unwrap().clear();

        let Some(suggestions) = self.service.search(value).await else {
            return;
        };

        *self.suggestions.write().unwrap() = suggestions.clone();

        if let Some(callback_on_fetch) = &self.callback_on_fetch {
            callback_on_fetch(&suggestions);
        }
        self.emit(WidgetEvent::SuggestionsChange(suggestions));
    }

    /// Handle the user picking a suggestion by its display label.
    ///
    /// Re-finds the suggestion in the current list, optionally geocodes it,
    /// notifies the host, and synthesizes an input-change carrying the
    /// resolved label. Geocode failures are swallowed: selection always
    /// completes with at least the unaugmented suggestion. Returns `None`
    /// when no current suggestion matches the label.
    pub async fn handle_select(&self, label: &str) -> Option<SelectedSuggestion> {
        let suggestion = self
            .suggestions
            .read()
            .unwrap()
            .iter()
            .find(|s| self.service.suggestion_label(s) == label)
            .cloned();

        let Some(suggestion) = suggestion else {
            debug!("no suggestion matches label {:?}", label);
            return None;
        };

        let provider = self.service.provider();
        let address = if self.resolve_address && provider.supports_geocoding() {
            match provider.suggestion_place_id(&suggestion) {
                Some(place_id) => match provider.geocode(&place_id).await {
                    Ok(parts) => Some(parts),
                    Err(e) => {
                        warn!("{} geocode failed: {}", provider.name(), e);
                        None
                    }
                },
                None => None,
            }
        } else {
            None
        };

        let selected = SelectedSuggestion { suggestion, address };

        if let Some(handle_selection) = &self.handle_suggestion_selection {
            handle_selection(&selected);
        }
        self.emit(WidgetEvent::SuggestionsSelect(selected.clone()));

        // The host form sees the selection as if the user typed the label
        if let Some(on_change) = &self.on_change {
            on_change(ChangeEvent {
                name: self.name.clone(),
                value: label.to_string(),
            });
        }

        Some(selected)
    }
}
