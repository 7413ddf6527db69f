//! Configuration module
//!
//! Handles loading and validating settings from YAML files and environment
//! variables, plus the mapping of the deprecated flat configuration shape
//! into the canonical settings tree.

mod compat;
mod settings;

pub use compat::{map_legacy_config, LegacyConfig, LegacyPlaceFields};
pub(crate) use compat::deprecation_warning;
pub use settings::*;
