use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::issues::{Issue, Report, ReportLocation};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractMessagesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Maximum number of messages to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of messages to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewCatalogParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub module_source_name: String,
    pub messages_dir: Option<String>,
    pub file_name: String,
    pub namespace: Option<String>,
    pub enforce_descriptions: bool,
    pub component_names: Vec<String>,
    pub plural_component_names: Vec<String>,
    pub function_names: Vec<String>,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            module_source_name: c.module_source_name,
            messages_dir: c.messages_dir,
            file_name: c.file_name,
            namespace: c.namespace,
            enforce_descriptions: c.enforce_descriptions,
            component_names: c.component_names,
            plural_component_names: c.plural_component_names,
            function_names: c.function_names,
            includes: c.includes,
            ignores: c.ignores,
            ignore_test_files: c.ignore_test_files,
        }
    }
}

// ============================================================
// Extraction Types (extract_messages)
// ============================================================

/// One extracted descriptor with the file it came from.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageItem {
    pub file_path: String,
    pub id: String,
    pub default_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An issue flattened for agents.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub message: String,
    /// `path:line:col`, or just the path for file-level issues
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let location = match issue.location() {
            ReportLocation::Source(ctx) => ctx.location.to_string(),
            ReportLocation::File { path } => path.to_string(),
        };
        Self {
            rule: issue.report_rule().to_string(),
            severity: issue.report_severity().to_string(),
            message: issue.message(),
            location,
            hint: issue.hint().map(String::from),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractMessagesResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub items: Vec<MessageItem>,
    /// Non-fatal issues: plural component use and unparseable files
    pub issues: Vec<IssueItem>,
    /// The error that stopped extraction; messages after it are missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<IssueItem>,
    pub pagination: Pagination,
}

// ============================================================
// Catalog Types (preview_catalog)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPreview {
    /// Where `intlx extract` would write the catalog; absent without a
    /// configured messagesDir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
    pub entry_count: usize,
    /// Catalog text as it would be written
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<IssueItem>,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
