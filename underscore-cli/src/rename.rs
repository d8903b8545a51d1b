use anyhow::Result;
use std::path::PathBuf;
use underscore_core::{rename_operation, OutputFormatter, RenameOptions};

use crate::render::paint;
use crate::OutputFormat;

/// Returns whether every planned file was renamed
pub fn handle_rename(
    paths: &[PathBuf],
    options: &RenameOptions,
    verbose: bool,
    output: OutputFormat,
    use_color: bool,
) -> Result<bool> {
    let result = rename_operation(paths, options, verbose, None)?;
    let success = result.is_success();

    let rendered = result.format(output.into());
    match output {
        OutputFormat::Json => println!("{rendered}"),
        OutputFormat::Summary => print!("{}", paint(&rendered, success, use_color)),
    }

    Ok(success)
}
