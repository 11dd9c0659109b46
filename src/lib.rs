//! helm-values-docs - Markdown documentation for annotated Helm values files.
//!
//! Reads a chart's `values.yaml`, recovers a parameter schema from its
//! comments and indentation, and writes two documents:
//!
//! - `values-reference.md`: one compact table per section
//! - `values.md`: a configuration guide with examples and best practices
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use helm_values_docs::{config::DocPaths, docs::DocsGenerator};
//!
//! let generator = DocsGenerator::new(DocPaths::from_repo_root("."));
//! let report = generator.generate()?;
//! println!("Documented {} parameters", report.parameters);
//! # Ok::<(), helm_values_docs::DocsError>(())
//! ```

/// Input and output locations.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Schema extraction and markdown rendering.
pub mod docs;

/// Console entry point and output helpers.
pub mod cli;

/// Logging setup for the generator binary.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{DocsError, Result};
