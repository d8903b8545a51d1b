use crate::config::RenameOptions;
use crate::execute::{execute_index, FsMover, Mover};
use crate::output::{ProblemReport, RenameResult};
use crate::planner::plan_paths;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Rename operation - plans the batch and, when it is clean, moves the files
pub fn rename_operation(
    paths: &[PathBuf],
    options: &RenameOptions,
    verbose: bool,
    working_dir: Option<&Path>,
) -> Result<RenameResult> {
    rename_operation_with(paths, options, verbose, working_dir, &mut FsMover)
}

/// Same as [`rename_operation`] with a caller-supplied move primitive
pub fn rename_operation_with<M: Mover>(
    paths: &[PathBuf],
    options: &RenameOptions,
    verbose: bool,
    working_dir: Option<&Path>,
    mover: &mut M,
) -> Result<RenameResult> {
    let index = plan_paths(paths, options, working_dir)?;

    if index.has_problems() {
        info!(problems = index.problem_count(), "batch blocked");
        return Ok(RenameResult {
            planned: index.len(),
            problems: Some(ProblemReport::from_index(&index)),
            report: None,
            verbose,
        });
    }

    let report = execute_index(&index, &options.retry, mover)?;
    Ok(RenameResult {
        planned: index.len(),
        problems: None,
        report: Some(report),
        verbose,
    })
}
