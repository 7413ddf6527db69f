//! Provider construction
//!
//! The variant is chosen exactly once, here, from the configured kind;
//! nothing downstream branches on which provider is in use.

use super::sdk::PlacesSdkSource;
use super::{GoogleMapsProvider, MapProvider, MapboxProvider};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::network::HttpClient;
use crate::script::ScriptLoader;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which provider variant a widget talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    GoogleMaps,
    Mapbox,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::GoogleMaps => write!(f, "google_maps"),
            ProviderKind::Mapbox => write!(f, "mapbox"),
        }
    }
}

/// Build the configured provider.
///
/// The SDK collaborators are only consulted for the SDK-backed variant but
/// are required up front so the call site does not branch on the kind.
pub fn build_provider(
    settings: &Settings,
    client: HttpClient,
    loader: Arc<dyn ScriptLoader>,
    sdk_source: Arc<dyn PlacesSdkSource>,
) -> Result<Arc<dyn MapProvider>> {
    if settings.credential.trim().is_empty() {
        return Err(Error::Configuration(format!(
            "provider {}: access credential must be provided",
            settings.provider
        )));
    }

    let provider: Arc<dyn MapProvider> = match settings.provider {
        ProviderKind::GoogleMaps => Arc::new(GoogleMapsProvider::new(
            settings.credential.clone(),
            settings.google.clone(),
            loader,
            sdk_source,
        )?),
        ProviderKind::Mapbox => Arc::new(MapboxProvider::new(
            settings.credential.clone(),
            settings.mapbox.clone(),
            client,
        )?),
    };

    Ok(provider)
}
