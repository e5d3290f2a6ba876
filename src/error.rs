//! Error handling for import-project.
//! Defines the error type shared by every stage and the exit codes the
//! binary reports for each of them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when the configuration file does not exist.
pub const EXIT_CONFIG_MISSING: i32 = 1;
/// Exit code used when the source directory does not exist.
pub const EXIT_SOURCE_DIR_MISSING: i32 = 2;
/// Exit code used when required flags were not given or the command line
/// could not be parsed.
pub const EXIT_MISSING_ARGUMENTS: i32 = 3;
/// Exit code used for every other failure.
pub const EXIT_FAILURE: i32 = 4;

/// Errors that can stop an import run.
///
/// Non-fatal conditions (a target file that does not exist, a transform entry
/// that is not an object) never surface as an `Error`; they are logged and
/// recorded in the stage report instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file (after `.json` resolution) does not exist
    #[error("Configuration file {} is missing!", .path.display())]
    ConfigMissing { path: PathBuf },

    /// The source directory of the project structure does not exist
    #[error("Source directory {} does not exist!", .path.display())]
    SourceDirMissing { path: PathBuf },

    /// The destination would overwrite, contain or live inside the source tree
    #[error(
        "Destination directory {} overlaps source directory {}",
        .destination_dir.display(),
        .source_dir.display()
    )]
    InvalidDestination { source_dir: PathBuf, destination_dir: PathBuf },

    /// Required command-line flags were not supplied
    #[error("Missing required flag(s): {}", .flags.join(", "))]
    MissingArguments { flags: Vec<&'static str> },

    /// The configuration document is not a valid JSON object
    #[error("Invalid configuration {}: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    /// Directory traversal failed during the structure copy
    #[error("Traversal error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConfigMissing { .. } => EXIT_CONFIG_MISSING,
            Error::SourceDirMissing { .. } => EXIT_SOURCE_DIR_MISSING,
            Error::MissingArguments { .. } => EXIT_MISSING_ARGUMENTS,
            Error::InvalidDestination { .. }
            | Error::InvalidConfig { .. }
            | Error::WalkError(_)
            | Error::IoError(_) => EXIT_FAILURE,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// The message is prefixed with `Warning: ` and the process exits with
/// [`Error::exit_code`].
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Warning: {err}");
    std::process::exit(err.exit_code());
}
