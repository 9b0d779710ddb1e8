//! Scaffolder error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scaffolding a project.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Target root directory is missing or not a directory.
    #[error("project root {} does not exist or is not a directory", .0.display())]
    MissingRoot(PathBuf),

    /// The user dismissed a configuration prompt.
    #[error("input cancelled")]
    InputCancelled,

    /// Directory creation failed.
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// File write failed.
    #[error("failed to write {}", .path.display())]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A built-in template failed to render.
    #[error("failed to render template for {path}")]
    Template {
        /// Destination path of the artifact being rendered.
        path: String,
        /// Underlying render error.
        #[source]
        source: handlebars::RenderError,
    },

    /// Manifest serialization failed.
    #[error("failed to serialize package manifest")]
    Manifest(#[from] serde_json::Error),
}
