//! Error types shared across the crate

use thiserror::Error;

/// Errors produced by providers, the search service, and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable construction-time configuration. Fatal: aborts
    /// provider setup, never produced per-call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Search text was empty after trimming. Rejected before any network or
    /// SDK interaction.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The provider reported a non-OK status for a search or geocode call.
    #[error("provider error ({provider}): status {status}")]
    Provider { provider: String, status: String },

    /// The SDK-backed provider's script has not finished loading. A valid
    /// state, not a fault; callers degrade to an empty suggestion list.
    #[error("provider {0} is not ready yet")]
    NotReady(String),

    /// Transport-level failure before any provider status was available.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    /// The provider does not offer a geocoding capability.
    #[error("provider {0} does not support geocoding")]
    GeocodingUnsupported(String),
}

pub type Result<T> = std::result::Result<T, Error>;
