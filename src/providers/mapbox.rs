//! Mapbox provider, backed by the forward-geocoding REST API
//!
//! <https://docs.mapbox.com/api/search/#forward-geocoding>

use super::traits::{require_search_text, MapProvider, RawResult};
use crate::config::MapboxOptions;
use crate::error::{Error, Result};
use crate::network::HttpClient;
use crate::results::{Suggestion, SuggestionList};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

const PROVIDER_NAME: &str = "mapbox";

/// REST-backed Mapbox provider
pub struct MapboxProvider {
    access_token: String,
    options: MapboxOptions,
    client: HttpClient,
}

impl MapboxProvider {
    /// Create a provider. Fails fast when the access token is blank.
    pub fn new(
        access_token: impl Into<String>,
        options: MapboxOptions,
        client: HttpClient,
    ) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(Error::Configuration(
                "MapboxProvider: access credential must be provided".to_string(),
            ));
        }

        Ok(Self {
            access_token,
            options,
            client,
        })
    }

    /// Request URL for a search: `{base}/geocoding/v5/{endpoint}/{text}.json`
    fn search_url(&self, text: &str) -> Result<String> {
        let base = Url::parse(&self.options.base_url).map_err(|e| {
            Error::Configuration(format!("MapboxProvider: invalid base URL: {}", e))
        })?;
        let url = base
            .join(&format!(
                "geocoding/v5/{}/{}.json",
                self.options.endpoint,
                urlencoding::encode(text)
            ))
            .map_err(|e| Error::Configuration(format!("MapboxProvider: invalid endpoint: {}", e)))?;
        Ok(url.to_string())
    }

    fn search_params(&self) -> HashMap<String, String> {
        HashMap::from([
            ("access_token".to_string(), self.access_token.clone()),
            ("autocomplete".to_string(), self.options.autocomplete.to_string()),
            ("fuzzyMatch".to_string(), self.options.fuzzy_match.to_string()),
            ("limit".to_string(), self.options.limit.to_string()),
        ])
    }
}

#[async_trait]
impl MapProvider for MapboxProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn search(&self, text: &str) -> Result<RawResult> {
        let text = require_search_text(PROVIDER_NAME, text)?;

        let url = self.search_url(text)?;
        let response = self.client.get_with_params(&url, self.search_params()).await?;

        if !response.is_success() {
            return Err(Error::Provider {
                provider: PROVIDER_NAME.to_string(),
                status: response.status.to_string(),
            });
        }

        debug!("mapbox search for {:?} returned {} bytes", text, response.text.len());
        Ok(response.json()?)
    }

    fn format_search_result(&self, raw: &RawResult) -> SuggestionList {
        raw.get("features")
            .and_then(|f| f.as_array())
            .map(|features| features.iter().cloned().map(Suggestion::new).collect())
            .unwrap_or_default()
    }

    fn suggestion_label(&self, suggestion: &Suggestion) -> String {
        suggestion.str_field("place_name").unwrap_or_default().to_string()
    }

    fn suggestion_place_id(&self, suggestion: &Suggestion) -> Option<String> {
        suggestion.str_field("id").map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> MapboxProvider {
        MapboxProvider::new("pk.test", MapboxOptions::default(), HttpClient::new().unwrap())
            .unwrap()
    }

    #[test]
    fn test_blank_token_fails_fast() {
        let result = MapboxProvider::new("", MapboxOptions::default(), HttpClient::new().unwrap());
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_search_url_shape() {
        let url = provider().search_url("10 Main St").unwrap();
        assert_eq!(
            url,
            "https://api.mapbox.com/geocoding/v5/mapbox.places/10%20Main%20St.json"
        );
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_request() {
        let result = provider().search(" ").await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_format_extracts_features_in_order() {
        let provider = provider();
        let raw = json!({
            "type": "FeatureCollection",
            "features": [
                {"id": "address.1", "place_name": "10 Main St, Springfield"},
                {"id": "address.2", "place_name": "10 Main Rd, Shelbyville"},
            ]
        });

        let suggestions = provider.format_search_result(&raw);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(
            provider.suggestion_label(&suggestions[0]),
            "10 Main St, Springfield"
        );
        assert_eq!(
            provider.suggestion_place_id(&suggestions[1]).as_deref(),
            Some("address.2")
        );
    }

    #[test]
    fn test_format_tolerates_unexpected_shapes() {
        let provider = provider();
        assert!(provider.format_search_result(&json!(null)).is_empty());
        assert!(provider.format_search_result(&json!({"features": "oops"})).is_empty());
        assert!(provider.format_search_result(&json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_format_is_deterministic() {
        let provider = provider();
        let raw = json!({"features": [{"place_name": "A"}]});
        assert_eq!(
            provider.format_search_result(&raw),
            provider.format_search_result(&raw)
        );
    }

    #[test]
    fn test_geocoding_not_offered() {
        assert!(!provider().supports_geocoding());
    }

    #[tokio::test]
    async fn test_geocode_reports_unsupported() {
        let result = provider().geocode("address.1").await;
        assert!(matches!(result, Err(Error::GeocodingUnsupported(_))));
    }
}
