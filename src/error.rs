//! Error handling for the apex application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for apex operations.
///
/// Every failure during generation surfaces as one of these variants; the
/// first error stops the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A directory or file could not be created because of missing permissions.
    #[error("Permission denied: {target}: {source}.")]
    PermissionDenied {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The requested root is not part of the embedded template tree.
    #[error("Template root '{root}' does not exist.")]
    TemplateRootNotFound { root: String },

    /// Represents errors that occur while loading preloaded answers
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Failed to parse answers as JSON: {0}.")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse answers as YAML: {0}.")]
    YamlParseError(#[from] serde_yaml::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error(
        "Output directory '{output_dir}' already exists. Use --force to overwrite it."
    )]
    OutputDirectoryExistsError { output_dir: String },
}

/// Convenience type alias for Results with apex's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Wraps permission failures with the path that could not be created.
/// Any other error kind is passed through unchanged.
pub fn wrap_permission<P: AsRef<std::path::Path>>(err: io::Error, target: P) -> Error {
    if err.kind() == io::ErrorKind::PermissionDenied {
        Error::PermissionDenied { target: target.as_ref().display().to_string(), source: err }
    } else {
        Error::IoError(err)
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
