use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{error, info, warn};

use crate::config::RetryPolicy;
use crate::error::{BatchBlocked, MoveError};
use crate::index::{ConflictIndex, RenamePlan};

/// Moves a single file. Implementations must fail rather than overwrite.
pub trait Mover {
    fn move_file(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Moves files with `std::fs::rename`
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMover;

impl Mover for FsMover {
    fn move_file(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        // A case-only rename finds the source itself at `to` on case-insensitive filesystems
        let case_only_rename =
            from.to_string_lossy().to_lowercase() == to.to_string_lossy().to_lowercase();

        if fs::symlink_metadata(to).is_ok() && !(case_only_rename && is_same_entry(from, to)) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }

        fs::rename(from, to)
    }
}

/// Whether both paths name the same directory entry
fn is_same_entry(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
            (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
            _ => false,
        }
    }

    #[cfg(not(unix))]
    {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MoveOutcome {
    Succeeded { attempts: u32 },
    Failed { attempts: u32, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub outcome: MoveOutcome,
}

impl FileOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, MoveOutcome::Succeeded { .. })
    }
}

/// Per-file results of one batch, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub files: Vec<FileOutcome>,
}

impl ExecutionReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.succeeded())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.succeeded())
    }

    pub fn all_succeeded(&self) -> bool {
        self.files.iter().all(FileOutcome::succeeded)
    }
}

/// Apply every plan in `index`, refusing when the batch has problems
pub fn execute_index<M: Mover>(
    index: &ConflictIndex,
    retry: &RetryPolicy,
    mover: &mut M,
) -> Result<ExecutionReport, BatchBlocked> {
    if index.has_problems() {
        return Err(BatchBlocked {
            count: index.problem_count(),
        });
    }
    Ok(execute(index.plans(), retry, mover))
}

/// Move each planned file in order. A file that keeps failing is reported
/// and skipped; nothing already moved is rolled back.
pub fn execute<M: Mover>(
    plans: &[RenamePlan],
    retry: &RetryPolicy,
    mover: &mut M,
) -> ExecutionReport {
    let files = plans
        .iter()
        .map(|plan| FileOutcome {
            source: plan.source.clone(),
            destination: plan.destination.clone(),
            outcome: move_with_retry(plan, retry, mover),
        })
        .collect();

    ExecutionReport { files }
}

fn move_with_retry<M: Mover>(plan: &RenamePlan, retry: &RetryPolicy, mover: &mut M) -> MoveOutcome {
    let total_attempts = retry.total_attempts();
    let mut attempts = 0;

    loop {
        attempts += 1;
        match mover.move_file(&plan.source, &plan.destination) {
            Ok(()) => {
                info!(
                    source = %plan.source.display(),
                    destination = %plan.destination.display(),
                    attempts,
                    "moved"
                );
                return MoveOutcome::Succeeded { attempts };
            },
            Err(e) if attempts < total_attempts => {
                warn!(
                    source = %plan.source.display(),
                    attempt = attempts,
                    error = %e,
                    "move failed, retrying"
                );
                thread::sleep(retry.delay);
            },
            Err(e) => {
                let err = MoveError::RetriesExhausted {
                    from: plan.source.clone(),
                    to: plan.destination.clone(),
                    attempts,
                    source: e,
                };
                error!("{err}");
                return MoveOutcome::Failed {
                    attempts,
                    error: err.to_string(),
                };
            },
        }
    }
}
