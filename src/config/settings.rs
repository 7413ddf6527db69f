//! Settings structures for the address autocomplete core

use crate::providers::ProviderKind;
use crate::results::NameForm;
use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which provider variant to construct
    pub provider: ProviderKind,
    /// Provider access credential (API key or access token). Required;
    /// construction fails fast without it.
    pub credential: String,
    pub service: ServiceOptions,
    pub google: GoogleOptions,
    pub mapbox: MapboxOptions,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (ADDRESS_AUTOCOMPLETE_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("ADDRESS_AUTOCOMPLETE_CREDENTIAL") {
            self.credential = val;
        }
        if let Ok(val) = std::env::var("ADDRESS_AUTOCOMPLETE_PROVIDER") {
            match val.to_lowercase().as_str() {
                "google" | "google_maps" => self.provider = ProviderKind::GoogleMaps,
                "mapbox" => self.provider = ProviderKind::Mapbox,
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("ADDRESS_AUTOCOMPLETE_SEARCH_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.service.search_debounce_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("ADDRESS_AUTOCOMPLETE_SEARCH_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.service.search_threshold = threshold;
            }
        }
    }
}

/// Search service behavior. Immutable per service instance; changing these
/// means constructing a new service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceOptions {
    /// Quiet period before a search fires, in milliseconds
    pub search_debounce_ms: u64,
    /// Minimum trimmed input length below which no search is performed
    pub search_threshold: usize,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            search_debounce_ms: 500,
            search_threshold: 4,
        }
    }
}

/// Address-component keys resolved by default, and which name form each reads.
/// Country uses the short form (ISO-style code); everything else the long form.
pub static DEFAULT_PLACE_FIELDS: Lazy<BTreeMap<String, NameForm>> = Lazy::new(|| {
    BTreeMap::from([
        ("street_number".to_string(), NameForm::LongName),
        ("route".to_string(), NameForm::LongName),
        ("locality".to_string(), NameForm::LongName),
        ("postal_town".to_string(), NameForm::LongName),
        ("administrative_area_level_1".to_string(), NameForm::LongName),
        ("postal_code".to_string(), NameForm::LongName),
        ("country".to_string(), NameForm::ShortName),
    ])
});

/// Options for the SDK-backed Google Maps provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleOptions {
    /// Address-component keys to resolve during geocoding, mapped to the
    /// component sub-field each reads
    pub place_fields: BTreeMap<String, NameForm>,
    /// Extra options forwarded verbatim to the SDK prediction call
    pub search_options: serde_json::Map<String, serde_json::Value>,
}

impl Default for GoogleOptions {
    fn default() -> Self {
        Self {
            place_fields: DEFAULT_PLACE_FIELDS.clone(),
            search_options: serde_json::Map::new(),
        }
    }
}

/// Options for the REST-backed Mapbox provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapboxOptions {
    /// Geocoding API base URL
    pub base_url: String,
    /// Endpoint name in the request path
    pub endpoint: String,
    pub autocomplete: bool,
    pub fuzzy_match: bool,
    /// Maximum number of features per response
    pub limit: u32,
}

impl Default for MapboxOptions {
    fn default() -> Self {
        Self {
            base_url: "https://api.mapbox.com/".to_string(),
            endpoint: "mapbox.places".to_string(),
            autocomplete: true,
            fuzzy_match: false,
            limit: 5,
        }
    }
}

/// Outgoing HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Connection pool size per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            pool_maxsize: 10,
            verify_ssl: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.provider, ProviderKind::GoogleMaps);
        assert_eq!(settings.service.search_debounce_ms, 500);
        assert_eq!(settings.service.search_threshold, 4);
        assert_eq!(settings.mapbox.endpoint, "mapbox.places");
        assert_eq!(settings.mapbox.limit, 5);
    }

    #[test]
    fn test_default_place_fields_country_is_short() {
        let settings = GoogleOptions::default();
        assert_eq!(
            settings.place_fields.get("country"),
            Some(&NameForm::ShortName)
        );
        assert_eq!(
            settings.place_fields.get("route"),
            Some(&NameForm::LongName)
        );
        assert_eq!(settings.place_fields.len(), 7);
    }

    #[test]
    fn test_settings_from_yaml() {
        let yaml = r#"
provider: mapbox
credential: pk.test-token
service:
  search_debounce_ms: 250
  search_threshold: 2
mapbox:
  limit: 10
  fuzzy_match: true
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.provider, ProviderKind::Mapbox);
        assert_eq!(settings.credential, "pk.test-token");
        assert_eq!(settings.service.search_debounce_ms, 250);
        assert_eq!(settings.service.search_threshold, 2);
        assert_eq!(settings.mapbox.limit, 10);
        assert!(settings.mapbox.fuzzy_match);
        // Untouched sections keep their defaults
        assert!(settings.mapbox.autocomplete);
        assert_eq!(settings.outgoing.pool_maxsize, 10);
    }
}
