//! Widget controller module
//!
//! Owns suggestion-list state and wires keystrokes to the search service
//! and selections to the optional geocode-and-resolve step, emitting one
//! uniform event protocol to the host regardless of provider.

mod controller;
mod events;

pub use controller::AddressWidget;
pub use events::{ChangeEvent, SelectedSuggestion, WidgetEvent};
