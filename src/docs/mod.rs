//! Documentation generation for annotated Helm values files.
//!
//! Recovers a parameter schema from the comments and indentation of a
//! `values.yaml`, then renders it as a compact reference and as a
//! narrative guide.

mod comments;
mod generator;
mod guide;
mod lines;
mod markdown;
mod reference;
mod schema;
mod sections;
mod value;

pub use comments::{CommentBlock, parse_comment_block};
pub use generator::{DocsGenerator, GenerationReport};
pub use guide::{SECTION_GUIDES, SectionGuide, generate_guide_page, guide_for};
pub use lines::{KeyLine, ancestor_path, preceding_comment_block};
pub use markdown::generate_parameter_table;
pub use reference::generate_reference_page;
pub use schema::{SchemaRecord, extract_schema, parse_values, resolve_path};
pub use sections::{DEFAULT_SECTION, Section, group_by_section, slugify};
pub use value::{MAPPING_REFERRAL, ValueType, flow_literal, render_default};
