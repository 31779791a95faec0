//! Error handling for raygen.
//! Defines the error kinds surfaced while normalizing options and materializing
//! a new application, plus the process-level error handler.

use std::io;
use thiserror::Error;

/// Custom error types for raygen operations.
///
/// Every variant is fatal: generation stops at the first error and anything
/// already written stays on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing option value given on the command line.
    #[error("{0}")]
    UsageError(String),

    /// Directory creation or file write failed at `path`.
    #[error("failed to create '{path}': {source}")]
    FilesystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A template referenced by the plan is missing from the template tree.
    #[error("template '{path}' could not be read: {source}")]
    TemplateReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Template text is not valid or rendering failed.
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// A template selection pattern is not a valid glob.
    #[error("Invalid template pattern: {0}.")]
    GlobError(#[from] globset::Error),

    /// The package manifest could not be serialized.
    #[error("Manifest error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Interactive confirmation failed.
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Writing to the terminal failed.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The operator declined to write into a non-empty destination.
    #[error("aborting")]
    Aborted,
}

/// Convenience type alias for Results with raygen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Each line of the message is printed to stderr prefixed with `error:`,
/// then the process exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    if let Error::Aborted = err {
        eprintln!("{err}");
    } else {
        eprintln!();
        for line in err.to_string().lines() {
            eprintln!("  error: {line}");
        }
        eprintln!();
    }
    std::process::exit(1);
}
