#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod execute;
pub mod index;
pub mod operations;
pub mod output;
pub mod planner;
pub mod transform;

pub use config::{Config, RenameOptions, RetryPolicy};
pub use error::{BatchBlocked, MoveError, ProblemKind};
pub use execute::{
    execute, execute_index, ExecutionReport, FileOutcome, FsMover, MoveOutcome, Mover,
};
pub use index::{ConflictIndex, DestinationConflict, RenamePlan};
pub use operations::{rename_operation, status_operation};
pub use output::{
    OutputFormat, OutputFormatter, ProblemReport, RenameResult, StatusResult,
};
pub use planner::{detect_case_insensitive_fs, plan_paths, split_file_name, Planner};
pub use transform::{
    force_replace_chars, is_valid_char, is_valid_name, to_underscore, DEFAULT_PLACEHOLDER,
};
