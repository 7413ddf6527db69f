//! Address autocomplete core
//!
//! Augments a plain text field with address-suggestion lookups against a
//! pluggable geocoding provider (Google Maps SDK or Mapbox REST), debounced
//! and thresholded so fast typing costs at most one outbound request per
//! quiet period. The presentation layer is the host's: this crate hands it
//! ordered labels and takes back selections.

pub mod config;
pub mod error;
pub mod network;
pub mod providers;
pub mod results;
pub mod script;
pub mod service;
pub mod widget;

pub use config::Settings;
pub use error::{Error, Result};
pub use providers::{build_provider, MapProvider, ProviderKind};
pub use results::{AddressParts, Suggestion, SuggestionList};
pub use service::SearchService;
pub use widget::{AddressWidget, WidgetEvent};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
