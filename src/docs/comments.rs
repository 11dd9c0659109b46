//! Parsing of the comment blocks that document a values key.

/// Marker that introduces an example value inside a comment.
pub const EXAMPLE_MARKER: &str = "Example:";

/// Leading characters of a section delimiter once the `#` is stripped.
pub const DELIMITER_MARKER: &str = "=====";

/// Description and examples recovered from the comments above a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    /// Description fragments joined with single spaces.
    pub description: String,
    /// Example values in the order they were written.
    pub examples: Vec<String>,
}

/// Parses a run of raw comment lines into a description and examples.
///
/// Each line loses its surrounding whitespace and one leading `#`. Lines
/// starting with `Example:` contribute examples; other non-empty lines that
/// are not section delimiters contribute to the description. A line such as
/// `# Timeout in seconds. Example: 30s` contributes to both.
///
/// # Example
///
/// ```
/// use helm_values_docs::docs::parse_comment_block;
///
/// let block = parse_comment_block(&["# Number of replicas", "# Example: 3"]);
/// assert_eq!(block.description, "Number of replicas");
/// assert_eq!(block.examples, vec!["3".to_string()]);
/// ```
pub fn parse_comment_block(lines: &[&str]) -> CommentBlock {
    let mut description = Vec::new();
    let mut examples = Vec::new();

    for line in lines {
        let content = strip_comment(line);

        if let Some(example) = content.strip_prefix(EXAMPLE_MARKER) {
            examples.push(example.trim().to_string());
            continue;
        }

        if content.is_empty() || content.starts_with(DELIMITER_MARKER) {
            continue;
        }

        match split_inline_example(content) {
            Some((text, example)) => {
                if !text.is_empty() {
                    description.push(text);
                }
                examples.push(example.to_string());
            }
            None => description.push(content),
        }
    }

    CommentBlock {
        description: description.join(" "),
        examples,
    }
}

/// Removes surrounding whitespace and a single leading `#` from a line.
pub(crate) fn strip_comment(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed).trim()
}

fn split_inline_example(content: &str) -> Option<(&str, &str)> {
    let marker = format!(" {EXAMPLE_MARKER}");
    let position = content.find(&marker)?;
    let (text, rest) = content.split_at(position);

    Some((text.trim(), rest[marker.len()..].trim()))
}
