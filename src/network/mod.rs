//! HTTP networking module
//!
//! Provides the HTTP client used by REST-backed geocoding providers.

mod client;

pub use client::{HttpClient, ProviderResponse};
