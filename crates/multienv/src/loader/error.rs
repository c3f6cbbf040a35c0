//! Error types for dotenv loading.
//!
//! Missing candidate files and malformed lines are not errors; the only
//! failure modes are a file that exists but cannot be read, and an
//! unresolvable default base directory. The underlying `std::io::Error`
//! is preserved as the error source in both cases.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading dotenv files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A candidate file exists but could not be read (permission denied,
    /// device error, ...).
    #[error("failed to read dotenv file at {path}")]
    Read {
        /// Resolved path of the file that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The default base directory could not be resolved from the process
    /// working directory.
    #[error("unable to determine current working directory")]
    WorkingDir(#[source] std::io::Error),
}
