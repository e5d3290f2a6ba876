//! Logger configuration for import-project.
//! Stage messages are written to stdout in the plain form the tool prints.

use std::io::Write;

/// Plain `message` lines on stdout; warnings and errors carry a `Warning: ` prefix.
fn format_record(
    buf: &mut env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    match record.level() {
        log::Level::Error | log::Level::Warn => writeln!(buf, "Warning: {}", record.args()),
        _ => writeln!(buf, "{}", record.args()),
    }
}

/// Installs the global logger: debug output with `verbose`, warnings only otherwise.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .target(env_logger::Target::Stdout)
        .format(format_record)
        .init();
}
