use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use super::{extract_schema, generate_guide_page, generate_reference_page, parse_values};
use crate::{
    Result,
    cli::formatting::{format_detail, format_success},
    config::DocPaths,
    core::DocsError,
};

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of documented parameters.
    pub parameters: usize,
    /// Where the reference page was written.
    pub reference_output: PathBuf,
    /// Where the guide page was written.
    pub guide_output: PathBuf,
}

/// Generates the values reference and the configuration guide.
///
/// Extraction runs once; both documents are composed from the same records.
pub struct DocsGenerator {
    paths: DocPaths,
}

impl DocsGenerator {
    /// Creates a generator for the given input and output locations.
    pub fn new(paths: DocPaths) -> Self {
        Self { paths }
    }

    /// Runs a full generation pass.
    ///
    /// The reference page is written before the guide; writes are not
    /// atomic, so a failure on the second leaves the first in place.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::MissingValues` before touching any output when
    /// the values file does not exist, and read, parse, directory or write
    /// errors otherwise.
    #[instrument(skip(self), fields(values = %self.paths.values.display()))]
    pub fn generate(&self) -> Result<GenerationReport> {
        let values_path = &self.paths.values;
        if !values_path.exists() {
            return Err(DocsError::MissingValues {
                path: values_path.clone(),
            });
        }

        println!("{}", format_detail(&format!("Parsing {}...", values_path.display())));
        let source = fs::read_to_string(values_path).map_err(|err| DocsError::Read {
            path: values_path.clone(),
            details: err.to_string(),
        })?;
        let root = parse_values(&source).map_err(|err| DocsError::yaml_parse(err, values_path))?;

        let records = extract_schema(&source, &root);
        println!("Found {} parameters", records.len());
        debug!(parameters = records.len(), "Extracted values schema");

        println!("{}", format_detail("Generating values-reference.md..."));
        let reference = generate_reference_page(&records);

        println!("{}", format_detail("Generating values.md..."));
        let guide = generate_guide_page(&records);

        write_document(&self.paths.reference_output, &reference)?;
        println!(
            "{}",
            format_success(&format!(
                "✅ Reference documentation: {}",
                self.paths.reference_output.display()
            ))
        );

        write_document(&self.paths.guide_output, &guide)?;
        println!(
            "{}",
            format_success(&format!(
                "✅ User guide documentation: {}",
                self.paths.guide_output.display()
            ))
        );

        info!(parameters = records.len(), "Documentation generated");

        Ok(GenerationReport {
            parameters: records.len(),
            reference_output: self.paths.reference_output.clone(),
            guide_output: self.paths.guide_output.clone(),
        })
    }
}

fn write_document(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| DocsError::CreateDir {
            path: parent.to_path_buf(),
            details: err.to_string(),
        })?;
    }

    fs::write(path, lines.join("\n")).map_err(|err| DocsError::file_write(err, path))?;
    debug!(path = %path.display(), lines = lines.len(), "Wrote document");

    Ok(())
}
