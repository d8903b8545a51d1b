use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::RenameOptions;
use crate::index::{ConflictIndex, RenamePlan};
use crate::transform::{force_replace_chars, is_valid_name, to_underscore};

/// Check if the filesystem at the given path is case-insensitive
pub fn detect_case_insensitive_fs(path: &Path) -> bool {
    let temp_dir = match TempDir::new_in(path) {
        Ok(dir) => dir,
        Err(_) => return false, // Assume case-sensitive if we can't test
    };

    let test_file_lower = temp_dir.path().join("case_probe_a");
    let test_file_upper = temp_dir.path().join("CASE_PROBE_A");

    if fs::write(&test_file_lower, b"probe").is_err() {
        return false;
    }

    // On a case-insensitive FS the upper-case spelling resolves to the same file
    fs::metadata(&test_file_upper).is_ok()
}

/// Split a file name into base name and extension (with its dot).
///
/// Only the last dot counts, and a leading dot belongs to the extension, so
/// `.DS_Store` has an empty base name and is never renamed.
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(dot) => file_name.split_at(dot),
        None => (file_name, ""),
    }
}

/// Builds rename plans for files and directory trees
pub struct Planner<'a> {
    options: &'a RenameOptions,
    case_insensitive: bool,
}

impl<'a> Planner<'a> {
    pub fn new(options: &'a RenameOptions, case_insensitive: bool) -> Self {
        Self {
            options,
            case_insensitive,
        }
    }

    /// Plan a single file. Files whose name is already valid underscore case
    /// never enter the index.
    pub fn plan_file(&self, path: &Path, index: &mut ConflictIndex) {
        let Some(file_name) = path.file_name() else {
            return;
        };
        let file_name = file_name.to_string_lossy();
        let (base, extension) = split_file_name(&file_name);

        let mut candidate = to_underscore(base);
        if candidate == base && is_valid_name(&candidate) {
            return;
        }

        if self.options.force && !is_valid_name(&candidate) {
            candidate = force_replace_chars(&candidate, &self.options.placeholder);
        }

        let destination = path.with_file_name(format!("{candidate}{extension}"));
        let has_conflict = self.has_conflict(&destination, base, &candidate);
        let plan = RenamePlan {
            source: path.to_path_buf(),
            is_valid_name: is_valid_name(&candidate),
            has_conflict,
            destination,
        };

        debug!(
            source = %plan.source.display(),
            destination = %plan.destination.display(),
            valid = plan.is_valid_name,
            conflict = plan.has_conflict,
            "planned rename"
        );

        if index.get(&plan.source).is_some() {
            debug!(source = %plan.source.display(), "file reached twice, replacing earlier plan");
        }
        index.insert(plan);
    }

    fn has_conflict(&self, destination: &Path, base: &str, candidate: &str) -> bool {
        if fs::symlink_metadata(destination).is_err() {
            return false;
        }

        if self.case_insensitive {
            // The existing entry is the source itself when only case differs
            candidate.to_lowercase() != base.to_lowercase()
        } else {
            candidate != base
        }
    }

    /// Plan every file under `roots`. Directories are walked pre-order with
    /// files before subdirectories; missing roots are skipped.
    pub fn plan_tree(&self, roots: &[PathBuf], index: &mut ConflictIndex) {
        for root in roots {
            let Ok(metadata) = fs::metadata(root) else {
                warn!(path = %root.display(), "skipping path that does not exist");
                continue;
            };

            if metadata.is_dir() {
                self.plan_directory(root, index);
            } else {
                self.plan_file(root, index);
            }
        }
    }

    fn plan_directory(&self, dir: &Path, index: &mut ConflictIndex) {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .follow_links(false)
            .sort_by(|a, b| {
                let a_is_dir = a.file_type().is_dir();
                let b_is_dir = b.file_type().is_dir();
                a_is_dir
                    .cmp(&b_is_dir)
                    .then_with(|| a.file_name().cmp(b.file_name()))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                },
            };

            if entry.file_type().is_dir() {
                continue;
            }
            if entry.path_is_symlink() && entry.path().is_dir() {
                debug!(path = %entry.path().display(), "skipping link to directory");
                continue;
            }
            self.plan_file(entry.path(), index);
        }
    }
}

/// Resolve `paths` against `working_dir` and make them absolute
pub fn resolve_roots(paths: &[PathBuf], working_dir: &Path) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|path| {
            let absolute_path = if path.is_absolute() {
                path.clone()
            } else {
                working_dir.join(path)
            };
            absolute_path.canonicalize().unwrap_or(absolute_path)
        })
        .collect()
}

/// Plan a whole batch: resolve roots, detect case sensitivity, walk
pub fn plan_paths(
    paths: &[PathBuf],
    options: &RenameOptions,
    working_dir: Option<&Path>,
) -> Result<ConflictIndex> {
    let working_dir = match working_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let roots = resolve_roots(paths, &working_dir);

    let case_insensitive = options.case_insensitive.unwrap_or_else(|| {
        let probe_dir = roots
            .iter()
            .find_map(|root| {
                if root.is_dir() {
                    Some(root.as_path())
                } else if root.is_file() {
                    root.parent()
                } else {
                    None
                }
            })
            .unwrap_or(working_dir.as_path());
        detect_case_insensitive_fs(probe_dir)
    });
    debug!(case_insensitive, roots = roots.len(), "planning batch");

    let mut index = ConflictIndex::new();
    Planner::new(options, case_insensitive).plan_tree(&roots, &mut index);
    Ok(index)
}
