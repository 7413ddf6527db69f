//! Geocoding provider module
//!
//! Defines the MapProvider trait and the two provider variants: the
//! SDK-backed Google Maps adapter and the REST-backed Mapbox adapter.

mod loader;
mod traits;

// Provider implementations
pub mod google_maps;
pub mod mapbox;
pub mod sdk;

pub use google_maps::GoogleMapsProvider;
pub use loader::{build_provider, ProviderKind};
pub use mapbox::MapboxProvider;
pub use traits::{MapProvider, RawResult};
