//! Provider trait and types

use crate::error::{Error, Result};
use crate::results::{AddressParts, Suggestion, SuggestionList};
use async_trait::async_trait;

/// Raw provider response before formatting. Shape is provider-defined; only
/// the provider that produced it may interpret it.
pub type RawResult = serde_json::Value;

/// Contract every geocoding provider implements.
///
/// A provider instance is constructed once per credential and is long-lived.
/// Geocoding is an optional capability: probe [`supports_geocoding`] before
/// calling [`geocode`].
///
/// [`supports_geocoding`]: MapProvider::supports_geocoding
/// [`geocode`]: MapProvider::geocode
#[async_trait]
pub trait MapProvider: Send + Sync {
    /// Provider name, used in logs and error messages
    fn name(&self) -> &str;

    /// Run a suggestion search for the given text.
    ///
    /// Rejects blank input with [`Error::InvalidInput`] before any network or
    /// SDK interaction. A non-OK provider status surfaces as
    /// [`Error::Provider`] carrying the raw status.
    async fn search(&self, text: &str) -> Result<RawResult>;

    /// Shape a raw search result into the suggestion list, preserving the
    /// provider's response order.
    ///
    /// Pure and infallible: must tolerate any raw shape this provider itself
    /// produces, degrading to an empty list rather than failing.
    fn format_search_result(&self, raw: &RawResult) -> SuggestionList;

    /// Display label for a suggestion. Pure; also used to re-find a
    /// suggestion by label after presentation-side virtualization.
    fn suggestion_label(&self, suggestion: &Suggestion) -> String;

    /// Identifier used to geocode a suggestion, when the provider has one.
    fn suggestion_place_id(&self, _suggestion: &Suggestion) -> Option<String> {
        None
    }

    /// Whether [`geocode`](MapProvider::geocode) is available.
    fn supports_geocoding(&self) -> bool {
        false
    }

    /// Resolve a place id into address parts.
    async fn geocode(&self, _place_id: &str) -> Result<AddressParts> {
        Err(Error::GeocodingUnsupported(self.name().to_string()))
    }
}

/// Shared blank-input guard: trims and rejects empty text.
pub(crate) fn require_search_text<'a>(provider: &str, text: &'a str) -> Result<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!(
            "{}: search text must be non-empty, got {:?}",
            provider, text
        )));
    }
    Ok(trimmed)
}
