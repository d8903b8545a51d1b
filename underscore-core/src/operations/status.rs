use crate::config::RenameOptions;
use crate::output::{ProblemReport, StatusResult};
use crate::planner::plan_paths;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Status operation - plans the batch and reports whether it could run
pub fn status_operation(
    paths: &[PathBuf],
    options: &RenameOptions,
    verbose: bool,
    working_dir: Option<&Path>,
) -> Result<StatusResult> {
    let index = plan_paths(paths, options, working_dir)?;

    Ok(StatusResult {
        ok: !index.has_problems(),
        planned: index.len(),
        problems: ProblemReport::from_index(&index),
        moves: index.plans().to_vec(),
        verbose,
    })
}
