//! Suggestion and address data model
//!
//! Suggestions are opaque, provider-defined records; only the owning
//! provider knows how to read a label or geocode id out of one.

mod types;

pub use types::*;
