//! High-level operations that correspond to CLI modes
//!
//! These modules contain the core business logic for each underscore
//! operation, separated from CLI concerns like argument parsing and output
//! formatting.

pub mod rename;
pub mod status;

pub use rename::rename_operation;
pub use status::status_operation;
