//! Google Maps provider, backed by the vendor Places SDK
//!
//! The SDK arrives through a remote script; until the script loader
//! completes and the SDK handle can be acquired, search and geocode report
//! not-ready and the layers above degrade to an empty suggestion list.

use super::sdk::{PlacesSdk, PlacesSdkSource};
use super::traits::{require_search_text, MapProvider, RawResult};
use crate::config::GoogleOptions;
use crate::error::{Error, Result};
use crate::results::{AddressParts, Suggestion, SuggestionList};
use crate::script::ScriptLoader;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

pub const SCRIPT_ID: &str = "google_maps_api";
pub const GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/js";

const PROVIDER_NAME: &str = "google_maps";

/// SDK-backed Google Maps provider
pub struct GoogleMapsProvider {
    api_key: String,
    options: GoogleOptions,
    loader: Arc<dyn ScriptLoader>,
    sdk_source: Arc<dyn PlacesSdkSource>,
    sdk: OnceCell<Arc<dyn PlacesSdk>>,
}

impl GoogleMapsProvider {
    /// Create a provider. Fails fast when the API key is blank.
    pub fn new(
        api_key: impl Into<String>,
        options: GoogleOptions,
        loader: Arc<dyn ScriptLoader>,
        sdk_source: Arc<dyn PlacesSdkSource>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration(
                "GoogleMapsProvider: access credential must be provided".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            options,
            loader,
            sdk_source,
            sdk: OnceCell::new(),
        })
    }

    /// Script URL for the Places SDK
    pub fn api_url(key: &str) -> String {
        format!("{}?libraries=places&key={}", GOOGLE_MAPS_BASE_URL, key)
    }

    /// Load the vendor script (once) and acquire the SDK handle.
    ///
    /// Memoized: after the first success every call is a cheap cell read.
    /// Until the script is present this reports [`Error::NotReady`].
    async fn ensure_ready(&self) -> Result<&Arc<dyn PlacesSdk>> {
        self.sdk
            .get_or_try_init(|| async {
                self.loader
                    .load(SCRIPT_ID, &Self::api_url(&self.api_key))
                    .await?;
                self.sdk_source.acquire().ok_or_else(|| {
                    Error::NotReady(format!(
                        "{}: SDK not available after script load",
                        PROVIDER_NAME
                    ))
                })
            })
            .await
    }

    fn prediction_options(&self, text: &str) -> serde_json::Value {
        let mut options = self.options.search_options.clone();
        options.insert("input".to_string(), serde_json::Value::String(text.to_string()));
        serde_json::Value::Object(options)
    }
}

#[async_trait]
impl MapProvider for GoogleMapsProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn search(&self, text: &str) -> Result<RawResult> {
        let text = require_search_text(PROVIDER_NAME, text)?;
        let sdk = self.ensure_ready().await?;

        let response = sdk.place_predictions(self.prediction_options(text)).await;
        if response.status != sdk.status_ok() {
            return Err(Error::Provider {
                provider: PROVIDER_NAME.to_string(),
                status: response.status,
            });
        }

        Ok(response.payload)
    }

    fn format_search_result(&self, raw: &RawResult) -> SuggestionList {
        // Predictions already arrive as the suggestion list
        raw.as_array()
            .map(|predictions| predictions.iter().cloned().map(Suggestion::new).collect())
            .unwrap_or_default()
    }

    fn suggestion_label(&self, suggestion: &Suggestion) -> String {
        suggestion.str_field("description").unwrap_or_default().to_string()
    }

    fn suggestion_place_id(&self, suggestion: &Suggestion) -> Option<String> {
        suggestion.str_field("place_id").map(String::from)
    }

    fn supports_geocoding(&self) -> bool {
        true
    }

    async fn geocode(&self, place_id: &str) -> Result<AddressParts> {
        let sdk = self.ensure_ready().await?;

        let response = sdk.geocode(place_id).await;
        if response.status != sdk.status_ok() {
            return Err(Error::Provider {
                provider: PROVIDER_NAME.to_string(),
                status: format!("could not process geocoding request, status {:?}", response.status),
            });
        }

        let components = response
            .payload
            .as_array()
            .and_then(|results| results.first())
            .and_then(|first| first.get("address_components"))
            .and_then(|c| c.as_array())
            .cloned()
            .unwrap_or_default();

        debug!(
            "geocoded place {} into {} raw components",
            place_id,
            components.len()
        );

        Ok(AddressParts::from_components(
            &components,
            &self.options.place_fields,
        ))
    }
}
