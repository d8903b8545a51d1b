use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Planning problems. Any one of them blocks the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// The new name still contains unsupported characters
    InvalidName,
    /// The destination exists and is not the source
    SourceConflict,
    /// Two or more sources would land on the same destination
    DestinationCollision,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidName => "invalid name",
            Self::SourceConflict => "source conflict",
            Self::DestinationCollision => "destination collision",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum MoveError {
    #[error(
        "failed to move {} to {} after {attempts} attempts: {source}",
        .from.display(),
        .to.display()
    )]
    RetriesExhausted {
        from: PathBuf,
        to: PathBuf,
        attempts: u32,
        #[source]
        source: io::Error,
    },
}

/// Returned when execution is requested for a batch that still has problems
#[derive(Debug, Error)]
#[error("refusing to rename: batch has {count} unresolved problem(s)")]
pub struct BatchBlocked {
    pub count: usize,
}
