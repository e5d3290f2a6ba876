//! import-project sets up a project from a skeleton directory.
//! It imports a JSON configuration as environment assignments, copies the
//! skeleton to its destination and substitutes `${name}` placeholders in the
//! listed files.

/// Command-line interface module for the import-project application
pub mod cli;

/// Configuration import into environment assignments
pub mod config;

/// JSON document loading shared by the import and transform stages
pub mod document;

/// Error types and exit codes for the import-project application
pub mod error;

/// Log output set-up for the binary
pub mod logger;

/// Stage sequencing for a full run
pub mod pipeline;

/// Recursive copy of the project skeleton
pub mod structure;

/// Placeholder substitution in target files
pub mod transform;
