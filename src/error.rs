//! Error handling for stamp.
//! Defines the error types and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors raised by a replace invocation.
///
/// The first error to occur anywhere in an invocation (data resolution,
/// pattern expansion, or file rewriting) is surfaced as the invocation's
/// outcome; the underlying cause is carried unmodified.
#[derive(Error, Debug)]
pub enum Error {
    /// A matched file could not be read or written
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// A file-mode data value could not be read
    #[error("cannot read data file '{path}': {source}")]
    ResolutionError { path: String, source: io::Error },

    /// A `files` pattern was malformed
    #[error("invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    /// The matching engine failed while traversing the filesystem
    #[error("glob expansion failed: {0}")]
    ExpansionError(#[from] glob::GlobError),

    /// The invocation options failed structural validation
    #[error("validation error: {0}")]
    ValidationError(String),

    /// The task definition file could not be loaded or parsed
    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with stamp's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
