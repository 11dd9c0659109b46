use std::{fmt, path::PathBuf, result};

use thiserror::Error;

/// Error types for documentation generation.
///
/// Covers the whole-run failures of a generation pass. Keys that cannot be
/// resolved against the parsed values are not errors; the extractor skips
/// them.
#[derive(Error, Debug)]
pub enum DocsError {
    /// The values file does not exist
    #[error("values.yaml not found at {}", .path.display())]
    MissingValues {
        /// Expected location of the values file
        path: PathBuf,
    },

    /// The values file exists but could not be read
    #[error("failed to read '{}': {details}", .path.display())]
    Read {
        /// Path of the file being read
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// YAML parsing error with location context
    #[error("failed to parse YAML at '{}': {details}", .path.display())]
    YamlParse {
        /// Path of the values file
        path: PathBuf,
        /// Parse error details
        details: String,
    },

    /// An output directory could not be created
    #[error("failed to create output directory '{}': {details}", .path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// A generated document could not be written
    #[error("failed to write '{}': {details}", .path.display())]
    FileWrite {
        /// Path of the document being written
        path: PathBuf,
        /// I/O error details
        details: String,
    },
}

/// A specialized `Result` type for documentation generation.
pub type Result<T> = result::Result<T, DocsError>;

impl DocsError {
    /// Creates a YAML parsing error for the given values file.
    pub fn yaml_parse(error: impl fmt::Display, path: impl Into<PathBuf>) -> Self {
        DocsError::YamlParse {
            path: path.into(),
            details: error.to_string(),
        }
    }

    /// Creates a write error for the given output document.
    pub fn file_write(error: impl fmt::Display, path: impl Into<PathBuf>) -> Self {
        DocsError::FileWrite {
            path: path.into(),
            details: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn missing_values_message_names_path() {
        let err = DocsError::MissingValues {
            path: PathBuf::from("/repo/charts/bunkerweb/values.yaml"),
        };

        assert_eq!(
            err.to_string(),
            "values.yaml not found at /repo/charts/bunkerweb/values.yaml"
        );
    }

    #[test]
    fn constructors_keep_path_and_details() {
        let err = DocsError::file_write("disk full", Path::new("docs/values.md"));

        assert_eq!(err.to_string(), "failed to write 'docs/values.md': disk full");
        assert!(matches!(
            DocsError::yaml_parse("bad indent", "values.yaml"),
            DocsError::YamlParse { details, .. } if details == "bad indent"
        ));
    }
}
