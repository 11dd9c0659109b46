use std::{
    env,
    path::{Path, PathBuf},
};

/// Input and output locations of a documentation run
///
/// All three paths are derived from a chart repository root following the
/// fixed layout `charts/bunkerweb/values.yaml` → `docs/*.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPaths {
    /// Annotated values file to document
    pub values: PathBuf,
    /// Destination of the compact values reference
    pub reference_output: PathBuf,
    /// Destination of the narrative configuration guide
    pub guide_output: PathBuf,
}

impl DocPaths {
    /// Builds the fixed layout below a repository root
    pub fn from_repo_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let docs_dir = root.join("docs");

        Self {
            values: root.join("charts").join("bunkerweb").join("values.yaml"),
            reference_output: docs_dir.join("values-reference.md"),
            guide_output: docs_dir.join("values.md"),
        }
    }

    /// Resolves the layout relative to the program's own location
    ///
    /// Walks up from the running executable to the first directory that
    /// holds `charts/bunkerweb/values.yaml`. Falls back to the directory
    /// this crate was built from, which only exists on the build machine.
    pub fn discover() -> Self {
        Self::from_repo_root(Self::repo_root())
    }

    /// Returns the repository root used by [`DocPaths::discover`]
    pub fn repo_root() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| Self::find_repo_root(&exe))
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
    }

    /// Finds the nearest ancestor of `start` that contains a values file
    pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| Self::from_repo_root(dir).values.is_file())
            .map(Path::to_path_buf)
    }
}
