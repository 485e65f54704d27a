//! Core types for project scaffolding

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// A single scaffolding request derived from user input
///
/// `project_name` is the module identifier exactly as given
/// (e.g. `github.com/acme/widget`); `folder_name` is its last path segment
/// (`widget`), used as the local directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    project_name: String,
    folder_name: String,
}

impl ProjectRequest {
    /// Resolve a request from the raw command-line argument
    ///
    /// # Errors
    /// - [`Error::MissingProjectName`] when the input is empty
    /// - [`Error::InvalidProjectName`] when no folder name can be derived
    pub fn new(project_name: impl Into<String>) -> Result<Self> {
        let project_name = project_name.into();

        if project_name.trim().is_empty() {
            return Err(Error::MissingProjectName);
        }

        let folder_name = Utf8Path::new(&project_name)
            .file_name()
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| Error::invalid_project_name(&project_name))?;

        Ok(Self {
            project_name,
            folder_name,
        })
    }

    /// Module identifier for the new project
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Local folder the project is created in
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// Destination directory below `workdir`
    pub fn destination(&self, workdir: &Utf8Path) -> Utf8PathBuf {
        workdir.join(&self.folder_name)
    }
}

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Existing-folder check and overwrite confirmation
    Prepare,
    /// Template clone
    Clone,
    /// Tree-wide module identifier substitution
    Rewrite,
    /// Manifest module rename
    ManifestEdit,
    /// Dependency tidy
    Tidy,
    /// Version-control metadata removal
    Cleanup,
}

impl Stage {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prepare => "Preparing destination",
            Self::Clone => "Cloning template",
            Self::Rewrite => "Rewriting module name",
            Self::ManifestEdit => "Updating manifest",
            Self::Tidy => "Tidying dependencies",
            Self::Cleanup => "Removing version-control metadata",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counters reported by the identity rewrite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Source files inspected
    pub files_scanned: usize,
    /// Source files whose contents changed
    pub files_rewritten: usize,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// New module identifier
    pub project_name: String,
    /// Local folder name
    pub folder_name: String,
    /// Full path of the created project
    pub location: Utf8PathBuf,
    /// Module identifier the template declared before the rewrite
    pub previous_module: String,
    /// Rewrite counters
    pub rewrite: RewriteStats,
    /// Commands the user should run next
    pub next_steps: Vec<String>,
}

/// Result of a scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// Project created
    Created(ProjectSummary),
    /// User declined to overwrite an existing folder; nothing changed
    Declined,
}
