//! Host-facing notification protocol

use crate::results::{AddressParts, Suggestion, SuggestionList};
use serde::Serialize;

/// Uniform notification emitted to the host's `on_update` handler.
///
/// One tagged union for every state transition, so hosts observe the widget
/// through a single callback regardless of which provider is in use. The
/// serialized form carries `type`/`payload` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WidgetEvent {
    /// The input value changed (keystroke or programmatic)
    InputChange(String),
    /// The suggestion list was replaced after a completed search
    SuggestionsChange(SuggestionList),
    /// The user picked a suggestion
    SuggestionsSelect(SelectedSuggestion),
}

/// A picked suggestion, optionally augmented with resolved address parts.
///
/// `address` is `None` when the provider offers no geocoding, the resolve
/// step is disabled, or geocoding failed. Selection always completes with
/// at least the unaugmented suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSuggestion {
    pub suggestion: Suggestion,
    pub address: Option<AddressParts>,
}

/// Synthesized input-change handed to the host form after a selection, so
/// the form behaves as if the user had typed the resolved label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeEvent {
    /// Field name of the widget
    pub name: String,
    /// Current input value
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_events_serialize_with_type_and_payload() {
        let event = WidgetEvent::InputChange("10 Main".to_string());
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "input_change", "payload": "10 Main"})
        );

        let event = WidgetEvent::SuggestionsChange(vec![]);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "suggestions_change", "payload": []})
        );
    }

    #[test]
    fn test_select_event_carries_address() {
        let mut address = AddressParts::new();
        address.insert("street_number", Some("10".to_string()));
        address.insert("country", None);

        let event = WidgetEvent::SuggestionsSelect(SelectedSuggestion {
            suggestion: Suggestion::new(json!({"description": "10 Main St"})),
            address: Some(address),
        });

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "suggestions_select");
        assert_eq!(value["payload"]["address"]["street_number"], "10");
        assert_eq!(value["payload"]["address"]["country"], serde_json::Value::Null);
    }
}
