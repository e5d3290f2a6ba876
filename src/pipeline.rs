//! Runs the three import stages in order.

use crate::{
    cli::Options,
    config::{import_config, Environment},
    error::Result,
    structure::{setup_project_structure, CopySummary},
    transform::{apply_transformations, TransformReport},
};

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub environment: Environment,
    pub copied: CopySummary,
    pub transforms: TransformReport,
}

fn newline(verbose: bool) {
    if verbose {
        println!();
    }
}

/// Imports the configuration, copies the project structure, then applies
/// placeholder substitutions.
///
/// The imported environment is exported into the process environment before
/// the structure is copied. A failing stage stops the run; later stages do
/// not start.
///
/// # Errors
/// Whatever the failing stage returns; see [`import_config`],
/// [`setup_project_structure`] and [`apply_transformations`].
pub fn run(options: &Options) -> Result<RunSummary> {
    let environment = import_config(&options.config)?;
    environment.export();
    newline(options.verbose);

    let copied = setup_project_structure(&options.source_dir, &options.destination_dir)?;
    newline(options.verbose);

    let transforms = apply_transformations(&options.transform_config, &options.target_dir)?;
    newline(options.verbose);

    Ok(RunSummary { environment, copied, transforms })
}
