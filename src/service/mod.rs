//! Search orchestration module
//!
//! Gates provider searches behind a trailing-edge debounce and a minimum
//! input length, and absorbs provider failures so the layers above never
//! crash on a bad response.

mod orchestrator;

pub use orchestrator::SearchService;
