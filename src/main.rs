//! import-project's entry point.
//! Parses the command line, validates it and runs the import pipeline.

use import_project::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    pipeline,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let options = args.into_options()?;
    let summary = pipeline::run(&options)?;

    log::debug!(
        "Run finished: {} variable(s), {} file(s) copied, {} file(s) transformed, {} missing",
        summary.environment.len(),
        summary.copied.files,
        summary.transforms.applied.len(),
        summary.transforms.missing.len()
    );
    Ok(())
}
