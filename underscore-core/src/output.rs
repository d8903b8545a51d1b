use comfy_table::{ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

use crate::error::ProblemKind;
use crate::execute::{ExecutionReport, MoveOutcome};
use crate::index::{ConflictIndex, DestinationConflict, RenamePlan};

const RULE: &str = "-----------------------------------";

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Everything that blocks a batch, grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemReport {
    pub invalid_names: Vec<RenamePlan>,
    pub conflicts: Vec<RenamePlan>,
    pub destination_collisions: Vec<DestinationConflict>,
}

impl ProblemReport {
    pub fn from_index(index: &ConflictIndex) -> Self {
        Self {
            invalid_names: index.invalid_names().into_iter().cloned().collect(),
            conflicts: index.conflicts().into_iter().cloned().collect(),
            destination_collisions: index.destination_conflicts(),
        }
    }

    pub fn kinds(&self) -> Vec<ProblemKind> {
        let mut kinds = Vec::new();
        if !self.invalid_names.is_empty() {
            kinds.push(ProblemKind::InvalidName);
        }
        if !self.conflicts.is_empty() {
            kinds.push(ProblemKind::SourceConflict);
        }
        if !self.destination_collisions.is_empty() {
            kinds.push(ProblemKind::DestinationCollision);
        }
        kinds
    }

    fn write_moves(output: &mut String, title: &str, plans: &[RenamePlan]) {
        if plans.is_empty() {
            return;
        }
        writeln!(output, "{title}").unwrap();
        writeln!(output, "{RULE}").unwrap();
        for plan in plans {
            writeln!(
                output,
                "{} => {}",
                plan.source.display(),
                plan.destination.display()
            )
            .unwrap();
        }
        writeln!(output, "{RULE}").unwrap();
        writeln!(output).unwrap();
    }

    fn collision_table(&self) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_header(vec!["Sources", "Destination"]);
        for collision in &self.destination_collisions {
            let sources = collision
                .sources
                .iter()
                .map(|s| s.display().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(vec![sources, collision.destination.display().to_string()]);
        }
        table
    }

    /// Render the three problem sections
    pub fn render(&self) -> String {
        let mut output = String::new();
        Self::write_moves(
            &mut output,
            "INVALID NAMES (NO SUPPORTED CHARS)",
            &self.invalid_names,
        );
        Self::write_moves(&mut output, "CONFLICTS (file exists)", &self.conflicts);

        if !self.destination_collisions.is_empty() {
            writeln!(output, "CONFLICTS DESTINATIONS (file exists)").unwrap();
            writeln!(output, "{RULE}").unwrap();
            writeln!(output, "{}", self.collision_table()).unwrap();
            writeln!(output, "{RULE}").unwrap();
            writeln!(output).unwrap();
        }

        output
    }
}

/// Result of a status operation (plan only, nothing moved)
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResult {
    pub ok: bool,
    pub planned: usize,
    pub problems: ProblemReport,
    pub moves: Vec<RenamePlan>,
    #[serde(skip)]
    pub verbose: bool,
}

/// Result of a rename operation
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameResult {
    pub planned: usize,
    /// Present when the batch was blocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems: Option<ProblemReport>,
    /// Present when the batch was executed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ExecutionReport>,
    #[serde(skip)]
    pub verbose: bool,
}

impl RenameResult {
    /// Nothing blocked the batch and every move succeeded
    pub fn is_success(&self) -> bool {
        self.problems.is_none()
            && self
                .report
                .as_ref()
                .map_or(true, ExecutionReport::all_succeeded)
    }

    pub fn renamed(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.succeeded().count())
    }

    pub fn failed(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.failed().count())
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for StatusResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.ok,
            "operation": "status",
            "planned": self.planned,
            "problem_kinds": self.problems.kinds(),
            "problems": self.problems,
            "moves": self.moves,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.ok {
            writeln!(output, "status: ok").unwrap();
            if self.verbose {
                for plan in &self.moves {
                    writeln!(
                        output,
                        "move: {} => {}",
                        plan.source.display(),
                        plan.destination.display()
                    )
                    .unwrap();
                }
            }
        } else {
            writeln!(output, "status: fail").unwrap();
            if self.verbose {
                output.push_str(&self.problems.render());
            }
        }

        output
    }
}

impl OutputFormatter for RenameResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.is_success(),
            "operation": "rename",
            "summary": {
                "planned": self.planned,
                "renamed": self.renamed(),
                "failed": self.failed(),
            },
            "problem_kinds": self.problems.as_ref().map(ProblemReport::kinds),
            "problems": self.problems,
            "report": self.report,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if let Some(problems) = &self.problems {
            output.push_str(&problems.render());
            return output;
        }

        let Some(report) = &self.report else {
            return output;
        };

        for file in &report.files {
            match &file.outcome {
                MoveOutcome::Succeeded { .. } if self.verbose => {
                    writeln!(
                        output,
                        "move: {} => {}",
                        file.source.display(),
                        file.destination.display()
                    )
                    .unwrap();
                },
                MoveOutcome::Succeeded { .. } => {},
                MoveOutcome::Failed { .. } => {
                    writeln!(
                        output,
                        "FAIL to move file: {} => {}",
                        file.source.display(),
                        file.destination.display()
                    )
                    .unwrap();
                },
            }
        }

        if self.renamed() > 0 {
            writeln!(output, "✓ Renamed {} files", self.renamed()).unwrap();
        }

        output
    }
}
