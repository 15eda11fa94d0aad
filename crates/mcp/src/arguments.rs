//! Decoding of the loosely typed argument map a tool call carries.

use rmcp::model::JsonObject;
use serde_json::Value;

/// The raw arguments of one tool call.
///
/// Lookups never fail: a missing value, an empty string or a value of the
/// wrong type all read as absent, and the caller picks the default. No value
/// is converted between strings and numbers.
#[derive(Debug, Default, Clone)]
pub(crate) struct ToolArguments(JsonObject);

impl ToolArguments {
    pub fn new(arguments: Option<JsonObject>) -> Self {
        Self(arguments.unwrap_or_default())
    }

    /// A non-empty JSON string.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// A JSON number, with fractions truncated.
    pub fn number(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }
}

/// Typed parameters of a tool, decoded once from its [`ToolArguments`].
pub(crate) trait FromArguments: Sized {
    fn from_arguments(arguments: &ToolArguments) -> Self;
}

/// The `language` and `version` every upstream request carries.
///
/// Absent values are filled in from the upstream configuration when the URL
/// is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Locale {
    pub language: Option<String>,
    pub version: Option<i64>,
}

impl FromArguments for Locale {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            language: arguments.string("language"),
            version: arguments.number("version"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{FromArguments, Locale, ToolArguments};

    fn arguments(value: serde_json::Value) -> ToolArguments {
        ToolArguments::new(value.as_object().cloned())
    }

    #[test]
    fn missing_arguments_are_absent() {
        let arguments = ToolArguments::new(None);

        assert_eq!(arguments.string("id"), None);
        assert_eq!(arguments.number("h2h"), None);
    }

    #[test]
    fn empty_string_is_absent() {
        let arguments = arguments(json!({ "language": "" }));
        assert_eq!(arguments.string("language"), None);
    }

    #[test]
    fn numbers_are_not_strings() {
        let arguments = arguments(json!({ "id": 13183 }));
        assert_eq!(arguments.string("id"), None);
    }

    #[test]
    fn numeric_strings_are_not_numbers() {
        let arguments = arguments(json!({ "h2h": "0", "tzoffset": " -60 " }));

        assert_eq!(arguments.number("h2h"), None);
        assert_eq!(arguments.number("tzoffset"), None);
    }

    #[test]
    fn wrong_types_are_absent() {
        let arguments = arguments(json!({ "id": true, "h2h": ["1"], "tzoffset": "soon" }));

        assert_eq!(arguments.string("id"), None);
        assert_eq!(arguments.number("h2h"), None);
        assert_eq!(arguments.number("tzoffset"), None);
    }

    #[test]
    fn fractions_are_truncated() {
        let arguments = arguments(json!({ "a": 0, "b": 120.9, "c": -60 }));

        assert_eq!(arguments.number("a"), Some(0));
        assert_eq!(arguments.number("b"), Some(120));
        assert_eq!(arguments.number("c"), Some(-60));
    }

    #[test]
    fn locale() {
        let locale = Locale::from_arguments(&arguments(json!({ "language": "nl", "version": 2900 })));

        assert_eq!(
            locale,
            Locale {
                language: Some("nl".to_string()),
                version: Some(2900),
            }
        );

        assert_eq!(Locale::from_arguments(&ToolArguments::default()), Locale::default());
    }
}
