use anyhow::Result;
use std::path::PathBuf;
use underscore_core::{status_operation, OutputFormatter, RenameOptions};

use crate::render::paint;
use crate::OutputFormat;

/// Returns whether the batch could be renamed cleanly
pub fn handle_status(
    paths: &[PathBuf],
    options: &RenameOptions,
    verbose: bool,
    output: OutputFormat,
    use_color: bool,
) -> Result<bool> {
    let result = status_operation(paths, options, verbose, None)?;

    let rendered = result.format(output.into());
    match output {
        OutputFormat::Json => println!("{rendered}"),
        OutputFormat::Summary => print!("{}", paint(&rendered, result.ok, use_color)),
    }

    Ok(result.ok)
}
