//! Vendor SDK surface for script-backed providers
//!
//! The actual SDK arrives through a remote script the host loads; these
//! traits are the seam the Google Maps provider talks through. Real hosts
//! bind them to the vendor objects; tests substitute scripted doubles.

use async_trait::async_trait;
use std::sync::Arc;

/// One vendor call outcome: the raw payload plus the status the vendor
/// reported for it. The status is compared against [`PlacesSdk::status_ok`].
#[derive(Debug, Clone)]
pub struct SdkResponse {
    pub payload: serde_json::Value,
    pub status: String,
}

impl SdkResponse {
    pub fn ok(payload: serde_json::Value) -> Self {
        Self {
            payload,
            status: "OK".to_string(),
        }
    }

    pub fn error(status: impl Into<String>) -> Self {
        Self {
            payload: serde_json::Value::Null,
            status: status.into(),
        }
    }
}

/// Autocomplete-prediction and geocoding calls exposed by the loaded SDK.
#[async_trait]
pub trait PlacesSdk: Send + Sync {
    /// Status value the vendor uses as its OK sentinel.
    fn status_ok(&self) -> &str {
        "OK"
    }

    /// Prediction call. `options` is the provider's configured search
    /// options with the query merged in under `input`.
    async fn place_predictions(&self, options: serde_json::Value) -> SdkResponse;

    /// Geocode call for a single place id.
    async fn geocode(&self, place_id: &str) -> SdkResponse;
}

/// Yields the SDK handle once the vendor script is present.
///
/// `None` means "not loaded yet", a valid state the provider reports as
/// not-ready, never a fault.
pub trait PlacesSdkSource: Send + Sync {
    fn acquire(&self) -> Option<Arc<dyn PlacesSdk>>;
}
