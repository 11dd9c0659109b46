//! Type classification and default rendering for parsed values.

use std::fmt;

use serde::Serialize;
use serde_yaml::Value;

/// Referral shown instead of expanding non-empty mappings inline.
pub const MAPPING_REFERRAL: &str = "See values.yaml";

/// Documented type of a values key, derived from its parsed default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// `true` or `false`
    Bool,
    /// Integer number
    Int,
    /// Text
    String,
    /// Sequence
    List,
    /// Mapping
    Object,
    /// Floats, nulls and tagged values
    Mixed,
}

impl ValueType {
    /// Classifies a parsed value.
    ///
    /// Booleans are never reported as `int`, and floating-point numbers fall
    /// through to `mixed`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Bool(_) => ValueType::Bool,
            Value::Number(number) if number.is_i64() || number.is_u64() => ValueType::Int,
            Value::String(_) => ValueType::String,
            Value::Sequence(_) => ValueType::List,
            Value::Mapping(_) => ValueType::Object,
            _ => ValueType::Mixed,
        }
    }

    /// Returns the tag written in the documentation tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::String => "string",
            ValueType::List => "list",
            ValueType::Object => "object",
            ValueType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the markdown shown in the Default column for a parsed value.
///
/// # Examples
///
/// ```
/// use helm_values_docs::docs::render_default;
///
/// let value: serde_yaml::Value = serde_yaml::from_str("[]").unwrap();
/// assert_eq!(render_default(&value), "`[]`");
///
/// let value: serde_yaml::Value = serde_yaml::from_str("\"nginx\"").unwrap();
/// assert_eq!(render_default(&value), "`\"nginx\"`");
/// ```
pub fn render_default(value: &Value) -> String {
    match value {
        Value::String(text) if text.is_empty() => "`\"\"`".to_string(),
        Value::String(text) => format!("`\"{text}\"`"),
        Value::Bool(flag) => format!("`{flag}`"),
        Value::Number(number) => format!("`{number}`"),
        Value::Sequence(items) if items.is_empty() => "`[]`".to_string(),
        Value::Sequence(_) => format!("`{}`", flow_literal(value)),
        Value::Mapping(map) if map.is_empty() => "`{}`".to_string(),
        Value::Mapping(_) => MAPPING_REFERRAL.to_string(),
        other => format!("`{}`", flow_literal(other)),
    }
}

/// Formats a value as a single-line flow literal.
///
/// Strings are double-quoted so list elements keep their textual form.
pub fn flow_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => format!("\"{text}\""),
        Value::Sequence(items) => {
            let items = items.iter().map(flow_literal).collect::<Vec<_>>();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries = map
                .iter()
                .map(|(key, entry)| format!("{}: {}", mapping_key(key), flow_literal(entry)))
                .collect::<Vec<_>>();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, flow_literal(&tagged.value)),
    }
}

fn mapping_key(key: &Value) -> String {
    match key {
        Value::String(text) => text.clone(),
        other => flow_literal(other),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn booleans_are_not_integers() {
        assert_eq!(ValueType::of(&yaml("true")), ValueType::Bool);
        assert_eq!(ValueType::of(&yaml("false")), ValueType::Bool);
        assert_eq!(ValueType::of(&yaml("1")), ValueType::Int);
    }

    #[test]
    fn classifies_every_shape() {
        assert_eq!(ValueType::of(&yaml("-8")), ValueType::Int);
        assert_eq!(ValueType::of(&yaml("\"8\"")), ValueType::String);
        assert_eq!(ValueType::of(&yaml("[1, 2]")), ValueType::List);
        assert_eq!(ValueType::of(&yaml("{a: 1}")), ValueType::Object);
        assert_eq!(ValueType::of(&yaml("0.5")), ValueType::Mixed);
        assert_eq!(ValueType::of(&yaml("~")), ValueType::Mixed);
    }

    #[test]
    fn renders_scalars() {
        assert_eq!(render_default(&yaml("\"\"")), "`\"\"`");
        assert_eq!(render_default(&yaml("DaemonSet")), "`\"DaemonSet\"`");
        assert_eq!(render_default(&yaml("true")), "`true`");
        assert_eq!(render_default(&yaml("false")), "`false`");
        assert_eq!(render_default(&yaml("30")), "`30`");
        assert_eq!(render_default(&yaml("1.5")), "`1.5`");
    }

    #[test]
    fn renders_collections() {
        assert_eq!(render_default(&yaml("[]")), "`[]`");
        assert_eq!(render_default(&yaml("{}")), "`{}`");
        assert_eq!(render_default(&yaml("{a: 1}")), MAPPING_REFERRAL);
        assert_eq!(
            render_default(&yaml("[\"a\", 2, true]")),
            "`[\"a\", 2, true]`"
        );
    }

    #[test]
    fn list_rendering_keeps_every_element() {
        let value = yaml("- key: node-role\n  operator: Equal\n- key: gpu\n");

        assert_eq!(
            render_default(&value),
            "`[{key: \"node-role\", operator: \"Equal\"}, {key: \"gpu\"}]`"
        );
    }

    #[test]
    fn type_tags_serialize_lowercase() {
        let tag = serde_yaml::to_string(&ValueType::Object).unwrap();
        assert_eq!(tag.trim(), "object");
    }
}
