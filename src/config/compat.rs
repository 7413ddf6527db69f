//! Mapping of the deprecated flat configuration into canonical [`Settings`]
//!
//! The old surface exposed a flat Google-only shape (`google_maps_api_key`,
//! bare `place_fields`/`search_options`, top-level debounce and threshold).
//! [`map_legacy_config`] is a pure function run once at configuration-load
//! time; it never influences the search service or provider design.

use super::settings::{GoogleOptions, ServiceOptions, Settings};
use crate::providers::ProviderKind;
use crate::results::NameForm;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use tracing::warn;

/// The deprecated flat configuration shape
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    pub google_maps_api_key: Option<String>,
    pub place_fields: Option<LegacyPlaceFields>,
    pub search_options: Option<serde_json::Map<String, serde_json::Value>>,
    pub search_debounce: Option<u64>,
    pub search_threshold: Option<usize>,
    /// Accepted and dropped; the old input filter hook has no replacement.
    pub filter_input: Option<serde_json::Value>,
}

/// Old configs carried place fields either as a map or as `[key, form]` pairs.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LegacyPlaceFields {
    Map(BTreeMap<String, NameForm>),
    Pairs(Vec<(String, NameForm)>),
}

impl LegacyPlaceFields {
    /// Normalize to the canonical map form
    fn into_map(self) -> BTreeMap<String, NameForm> {
        match self {
            LegacyPlaceFields::Map(map) => map,
            LegacyPlaceFields::Pairs(pairs) => pairs.into_iter().collect(),
        }
    }
}

static WARNED_FIELDS: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Log a deprecation warning once per field name for the process lifetime.
pub(crate) fn deprecation_warning(field: &'static str, replacement: Option<&str>) {
    let mut warned = WARNED_FIELDS.lock().unwrap();
    if !warned.insert(field) {
        return;
    }
    match replacement {
        Some(replacement) => warn!(
            "[Deprecation] AddressWidget: \"{}\" is deprecated, please use \"{}\" instead.",
            field, replacement
        ),
        None => warn!("[Deprecation] AddressWidget: \"{}\" is deprecated.", field),
    }
}

/// Map a deprecated flat config into the canonical [`Settings`] tree.
///
/// The legacy surface only ever configured the Google provider, so the
/// result always selects [`ProviderKind::GoogleMaps`]. Fields the legacy
/// shape does not cover keep their defaults.
pub fn map_legacy_config(legacy: LegacyConfig) -> Settings {
    let mut google = GoogleOptions::default();
    let mut service = ServiceOptions::default();

    if legacy.google_maps_api_key.is_some() {
        deprecation_warning("google_maps_api_key", Some("credential"));
    }
    if let Some(place_fields) = legacy.place_fields {
        deprecation_warning("place_fields", Some("google.place_fields"));
        google.place_fields = place_fields.into_map();
    }
    if let Some(search_options) = legacy.search_options {
        deprecation_warning("search_options", Some("google.search_options"));
        google.search_options = search_options;
    }
    if let Some(debounce) = legacy.search_debounce {
        service.search_debounce_ms = debounce;
    }
    if let Some(threshold) = legacy.search_threshold {
        service.search_threshold = threshold;
    }
    if legacy.filter_input.is_some() {
        deprecation_warning("filter_input", None);
    }

    Settings {
        provider: ProviderKind::GoogleMaps,
        credential: legacy.google_maps_api_key.unwrap_or_default(),
        service,
        google,
        ..Settings::default()
    }
}
