use std::path::PathBuf;

use serde::Serialize;

use crate::core::MessageDescriptor;
use crate::issues::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Extract,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

/// Descriptors of one unit, as printed by `extract --json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitMessages {
    pub file_path: String,
    pub messages: Vec<MessageDescriptor>,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub units: Vec<UnitMessages>,
    pub message_count: usize,
    /// Catalog file path and entry count, when a catalog was configured.
    pub catalog: Option<(PathBuf, usize)>,
    /// Rewritten sources written under `--out-dir`.
    pub rewritten_count: usize,
    /// Print `units` as JSON instead of the plain summary.
    pub json: bool,
    /// Extraction stopped at a fatal error.
    pub failed: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running intlx commands
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during extraction, sorted.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
}
