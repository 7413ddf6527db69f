//! Core data types for suggestions and resolved addresses

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single candidate result returned by a provider for a query.
///
/// The inner value is whatever JSON shape the provider produced; no shared
/// structure is assumed across providers. Label and geocode-id extraction go
/// through the provider that created the suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestion(pub serde_json::Value);

impl Suggestion {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Read a top-level string field, if present.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Suggestion {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Ordered suggestion sequence, replaced wholesale on each completed search.
/// Insertion order is the provider's response order.
pub type SuggestionList = Vec<Suggestion>;

/// Which sub-field of a matched address component is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameForm {
    /// The full, human-readable form (`long_name`).
    LongName,
    /// The abbreviated form (`short_name`), e.g. a country code.
    ShortName,
}

impl NameForm {
    /// JSON field name this form reads from a raw address component.
    pub fn field(self) -> &'static str {
        match self {
            NameForm::LongName => "long_name",
            NameForm::ShortName => "short_name",
        }
    }
}

/// Resolved address components keyed by component type.
///
/// Each configured key maps to the value read from the first matching raw
/// component, or `None` when the provider returned no component of that type.
/// A missing component is an absent value, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressParts(pub BTreeMap<String, Option<String>>);

impl AddressParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Option<String>> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build from a raw component list: for each `(key, form)` pair, select
    /// the first component whose `types` array contains `key` and read the
    /// field named by `form`.
    pub fn from_components<'a, I>(components: &[serde_json::Value], fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a NameForm)>,
    {
        let mut parts = Self::new();
        for (key, form) in fields {
            let value = components
                .iter()
                .find(|component| {
                    component
                        .get("types")
                        .and_then(|t| t.as_array())
                        .map(|types| types.iter().any(|t| t.as_str() == Some(key.as_str())))
                        .unwrap_or(false)
                })
                .and_then(|component| component.get(form.field()))
                .and_then(|v| v.as_str())
                .map(String::from);
            parts.insert(key.clone(), value);
        }
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_suggestion_str_field() {
        let s = Suggestion::new(json!({"place_name": "10 Main St, Springfield"}));
        assert_eq!(s.str_field("place_name"), Some("10 Main St, Springfield"));
        assert_eq!(s.str_field("missing"), None);
    }

    #[test]
    fn test_address_parts_first_match_wins() {
        let components = vec![
            json!({"types": ["street_number"], "long_name": "10", "short_name": "10"}),
            json!({"types": ["route"], "long_name": "Main Street", "short_name": "Main St"}),
            json!({"types": ["route"], "long_name": "Second Route", "short_name": "2nd"}),
        ];
        let fields = BTreeMap::from([
            ("street_number".to_string(), NameForm::LongName),
            ("route".to_string(), NameForm::ShortName),
        ]);

        let parts = AddressParts::from_components(&components, &fields);
        assert_eq!(parts.get("street_number"), Some(&Some("10".to_string())));
        assert_eq!(parts.get("route"), Some(&Some("Main St".to_string())));
    }

    #[test]
    fn test_address_parts_missing_component_is_none() {
        let components = vec![
            json!({"types": ["street_number"], "long_name": "10", "short_name": "10"}),
        ];
        let fields = BTreeMap::from([
            ("street_number".to_string(), NameForm::LongName),
            ("country".to_string(), NameForm::ShortName),
        ]);

        let parts = AddressParts::from_components(&components, &fields);
        assert_eq!(parts.get("street_number"), Some(&Some("10".to_string())));
        assert_eq!(parts.get("country"), Some(&None));
    }

    #[test]
    fn test_address_parts_tolerates_malformed_components() {
        let components = vec![json!("not an object"), json!({"long_name": "no types"})];
        let fields = BTreeMap::from([("route".to_string(), NameForm::LongName)]);

        let parts = AddressParts::from_components(&components, &fields);
        assert_eq!(parts.get("route"), Some(&None));
    }
}
