//! Error types for layout-projects

use thiserror::Error;

/// Result type alias using layout-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// No project name was given
    #[error("need project name")]
    MissingProjectName,

    /// Project name has no usable final path component
    #[error("Invalid project name: {name}. The last path segment must name a folder")]
    InvalidProjectName { name: String },

    /// Removing a pre-existing destination failed
    #[error("Failed to remove existing folder {path}: {source}")]
    RemoveExisting {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// External command could not be started
    #[error("Failed to run {program}: {source}. Is it installed and in PATH?")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External command exited unsuccessfully
    #[error("`{command}` failed: {output}")]
    ToolFailed { command: String, output: String },

    /// Manifest missing from the project root
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: String },

    /// Manifest does not start with a module declaration
    #[error("Failed to read module name from {path}: {message}")]
    ManifestParse { path: String, message: String },

    /// Reading or writing a source file failed
    #[error("Failed to rewrite {path}: {source}")]
    FileRewrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Failed to walk project tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a remove existing folder error
    pub fn remove_existing(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::RemoveExisting {
            path: path.into(),
            source,
        }
    }

    /// Create a command spawn error
    pub fn command_spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandSpawn {
            program: program.into(),
            source,
        }
    }

    /// Create a tool failed error
    pub fn tool_failed(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self::ToolFailed {
            command: command.into(),
            output: output.into(),
        }
    }

    /// Create a manifest not found error
    pub fn manifest_not_found(path: impl Into<String>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    /// Create a manifest parse error
    pub fn manifest_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file rewrite error
    pub fn file_rewrite(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileRewrite {
            path: path.into(),
            source,
        }
    }
}
