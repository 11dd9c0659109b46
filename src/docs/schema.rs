//! Schema extraction from an annotated values file.
//!
//! The parsed YAML tree is authoritative for types and defaults; the raw
//! text only contributes section headers, descriptions, examples and the
//! order in which keys are documented.

use serde::Serialize;
use serde_yaml::Value;
use tracing::trace;

use super::{
    comments::parse_comment_block,
    lines::{KeyLine, ancestor_path, is_section_delimiter, preceding_comment_block, section_title},
    value::{ValueType, render_default},
};

/// One documented parameter of the values file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRecord {
    /// Title of the enclosing section banner, or empty before the first one.
    pub section: String,
    /// Dotted path from the document root, e.g. `bunkerweb.kind`.
    pub parameter: String,
    /// Description taken from the comments above the key.
    pub description: String,
    /// Type of the parsed default value.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Markdown rendering of the parsed default value.
    pub default: String,
    /// Values listed on `Example:` comment lines.
    pub examples: Vec<String>,
}

/// Parses the values text into the tree used for resolution.
///
/// Merge keys (`<<: *anchor`) are applied, so the merged entries appear on
/// the mapping and no literal `<<` key survives.
pub fn parse_values(source: &str) -> serde_yaml::Result<Value> {
    let mut root: Value = serde_yaml::from_str(source)?;
    root.apply_merge()?;
    Ok(root)
}

/// Extracts one record per documentable key, in file order.
///
/// Keys whose dotted path cannot be resolved in `root` are skipped, as are
/// keys with a null value and parent keys that only open a nested block.
///
/// # Example
///
/// ```
/// use helm_values_docs::docs::{extract_schema, parse_values};
///
/// let source = "# Number of replicas\nreplicas: 3\n";
/// let root = parse_values(source).unwrap();
///
/// let records = extract_schema(source, &root);
/// assert_eq!(records[0].parameter, "replicas");
/// assert_eq!(records[0].default, "`3`");
/// ```
pub fn extract_schema(source: &str, root: &Value) -> Vec<SchemaRecord> {
    let lines = source.lines().collect::<Vec<_>>();
    let mut records = Vec::new();
    let mut section = String::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];

        if is_section_delimiter(line) {
            let (title, resume_at) = section_title(&lines, index);
            if let Some(title) = title {
                section = title;
            }
            index = resume_at;
            continue;
        }

        if let Some(key_line) = KeyLine::parse(line) {
            if let Some(record) = build_record(&lines, index, &key_line, &section, root) {
                records.push(record);
            }
        }

        index += 1;
    }

    records
}

fn build_record(
    lines: &[&str],
    index: usize,
    key_line: &KeyLine<'_>,
    section: &str,
    root: &Value,
) -> Option<SchemaRecord> {
    let comments = parse_comment_block(&preceding_comment_block(lines, index));

    let mut path = ancestor_path(lines, index, key_line.indent);
    path.push(key_line.key);

    let Some(value) = resolve_path(root, &path) else {
        trace!(line = index + 1, path = %path.join("."), "Skipping unresolvable key");
        return None;
    };

    if value.is_null() || is_structural_parent(key_line, value) {
        trace!(line = index + 1, path = %path.join("."), "Skipping key without a documentable value");
        return None;
    }

    let description = if comments.description.is_empty() {
        format!("Configuration for {}", key_line.key)
    } else {
        comments.description
    };

    Some(SchemaRecord {
        section: section.to_string(),
        parameter: path.join("."),
        description,
        value_type: ValueType::of(value),
        default: render_default(value),
        examples: comments.examples,
    })
}

/// Descends one mapping lookup per path segment.
pub fn resolve_path<'v>(root: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter()
        .try_fold(root, |current, segment| current.as_mapping()?.get(*segment))
}

fn is_structural_parent(key_line: &KeyLine<'_>, value: &Value) -> bool {
    !key_line.has_inline_value && value.as_mapping().is_some_and(|map| !map.is_empty())
}
