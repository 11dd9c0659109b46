//! Line classification and the backward scans over the raw values text.
//!
//! Both scans take the whole file as an immutable slice of lines plus the
//! index of a key line. The comment scan only looks at the contiguous run
//! directly above the key; the ancestry scan walks every preceding line.

use std::sync::OnceLock;

use regex::Regex;

use super::comments::{DELIMITER_MARKER, strip_comment};

/// Prefix of a stripped line that opens or closes a section banner.
pub const SECTION_DELIMITER: &str = "# =====";

static KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::unwrap_used)]
fn key_pattern() -> &'static Regex {
    KEY_PATTERN.get_or_init(|| Regex::new(r"^(\s*)([^:]+):").unwrap())
}

/// A line that defines a key in the values file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLine<'a> {
    /// Width of the leading whitespace.
    pub indent: usize,
    /// Key name with surrounding whitespace removed.
    pub key: &'a str,
    /// Whether anything other than a comment follows the separator.
    pub has_inline_value: bool,
}

impl<'a> KeyLine<'a> {
    /// Recognises a key-defining line.
    ///
    /// Comments, document separators and lines without a `:` are rejected,
    /// as are list items whose text before the colon is a quoted scalar.
    pub fn parse(line: &'a str) -> Option<Self> {
        let stripped = line.trim();
        if stripped.starts_with('#') || stripped.starts_with("---") || !stripped.contains(':') {
            return None;
        }

        let captures = key_pattern().captures(line)?;
        let indent = captures.get(1)?.as_str().len();
        let key_match = captures.get(2)?;
        let key = key_match.as_str().trim();

        if key.is_empty() || key.starts_with('"') || key.starts_with('\'') {
            return None;
        }

        let rest = skip_anchor(line[key_match.end() + 1..].trim());
        let has_inline_value = !rest.is_empty() && !rest.starts_with('#');

        Some(KeyLine {
            indent,
            key,
            has_inline_value,
        })
    }
}

/// Drops a leading `&anchor` so an anchored block parent reads as bare.
fn skip_anchor(rest: &str) -> &str {
    if !rest.starts_with('&') {
        return rest;
    }

    rest.split_once(char::is_whitespace)
        .map_or("", |(_, remainder)| remainder.trim_start())
}

/// Returns `true` for lines that open or close a section banner.
pub fn is_section_delimiter(line: &str) -> bool {
    line.trim().starts_with(SECTION_DELIMITER)
}

/// Looks ahead from a delimiter line for the section title.
///
/// Returns the title (if one was found) together with the index where
/// scanning resumes: the title line itself, or the first line after the
/// comment run when no title was present.
pub fn section_title(lines: &[&str], delimiter_index: usize) -> (Option<String>, usize) {
    let mut index = delimiter_index + 1;

    while let Some(line) = lines.get(index) {
        let stripped = line.trim();
        if !stripped.starts_with('#') {
            break;
        }

        let content = strip_comment(stripped);
        if !content.starts_with(DELIMITER_MARKER) && !content.is_empty() {
            return (Some(content.to_string()), index);
        }

        index += 1;
    }

    (None, index)
}

/// Collects the comment lines directly above a key line.
///
/// Walks upward over comment lines and stops at the first blank line or
/// non-comment line. The result is in file order.
pub fn preceding_comment_block<'a>(lines: &[&'a str], key_index: usize) -> Vec<&'a str> {
    let mut block = lines[..key_index]
        .iter()
        .rev()
        .take_while(|line| line.trim().starts_with('#'))
        .copied()
        .collect::<Vec<_>>();

    block.reverse();
    block
}

/// Reconstructs the ancestor keys of a key line from indentation alone.
///
/// Every preceding key line indented strictly less than the current
/// frontier becomes the next ancestor, and the frontier drops to its
/// indentation. Returned shallowest first.
pub fn ancestor_path<'a>(lines: &[&'a str], key_index: usize, indent: usize) -> Vec<&'a str> {
    let mut frontier = indent;
    let mut ancestors = Vec::new();

    for line in lines[..key_index].iter().rev() {
        if frontier == 0 {
            break;
        }

        if let Some(parent) = KeyLine::parse(line) {
            if parent.indent < frontier {
                ancestors.push(parent.key);
                frontier = parent.indent;
            }
        }
    }

    ancestors.reverse();
    ancestors
}
