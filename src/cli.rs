//! Command-line interface implementation for import-project.
//! Provides argument parsing and the upfront check that every required flag
//! was supplied.

use crate::error::{Error, Result, EXIT_MISSING_ARGUMENTS};
use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for import-project.
///
/// Required flags are declared optional here so that a missing one is
/// reported through [`Args::into_options`] with every absent flag named.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Import configuration, copy a project skeleton and fill in its placeholders",
    long_about = None
)]
pub struct Args {
    /// JSON configuration file (`.json` is appended when missing)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory whose files receive placeholder substitutions
    #[arg(long, value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Directory holding the project structure to copy
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory the project structure is copied to; replaced if it exists
    #[arg(long, value_name = "DIR")]
    pub destination_dir: Option<PathBuf>,

    /// Separate transform document; defaults to the --config file
    #[arg(long, value_name = "PATH")]
    pub transform_config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub config: PathBuf,
    pub transform_config: PathBuf,
    pub target_dir: PathBuf,
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub verbose: bool,
}

impl Args {
    /// Checks that every required flag is present.
    ///
    /// # Errors
    /// * `Error::MissingArguments` naming each missing flag, in declaration order
    pub fn into_options(self) -> Result<Options> {
        let mut missing = Vec::new();
        if self.config.is_none() {
            missing.push("--config");
        }
        if self.target_dir.is_none() {
            missing.push("--target-dir");
        }
        if self.source_dir.is_none() {
            missing.push("--source-dir");
        }
        if self.destination_dir.is_none() {
            missing.push("--destination-dir");
        }

        match (self.config, self.target_dir, self.source_dir, self.destination_dir) {
            (Some(config), Some(target_dir), Some(source_dir), Some(destination_dir)) => {
                Ok(Options {
                    transform_config: self.transform_config.unwrap_or_else(|| config.clone()),
                    config,
                    target_dir,
                    source_dir,
                    destination_dir,
                    verbose: self.verbose,
                })
            }
            _ => Err(Error::MissingArguments { flags: missing }),
        }
    }
}

/// Exit code for a command line clap rejected, or `None` when clap only
/// printed help or version information.
pub fn usage_exit_code(err: &clap::Error) -> Option<i32> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(EXIT_MISSING_ARGUMENTS),
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing `--help` or `--version`
/// * With status code 3 for unknown flags or flags missing their value
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match usage_exit_code(&e) {
            Some(code) => {
                let _ = e.print();
                std::process::exit(code);
            }
            None => e.exit(),
        },
    }
}
