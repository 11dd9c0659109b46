use std::process::ExitCode;

use super::formatting::{format_error, format_header};
use crate::{Result, config::DocPaths, core::DocsError, docs::DocsGenerator};

/// Runs one generation pass and maps its outcome to the process exit code.
///
/// A missing values file is reported on stdout and yields
/// `ExitCode::FAILURE` without writing anything; every other failure is
/// returned to the caller.
pub fn run(paths: DocPaths) -> Result<ExitCode> {
    match DocsGenerator::new(paths).generate() {
        Ok(_) => {
            println!("{}", format_header("🎉 Documentation generation complete!"));
            Ok(ExitCode::SUCCESS)
        }
        Err(DocsError::MissingValues { path }) => {
            println!(
                "{}",
                format_error(&format!("❌ Error: values.yaml not found at {}", path.display()))
            );
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err),
    }
}
