use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{ConfigOverrides, load_config},
    core::context::{CatalogMode, ExtractionRun, ProjectContext},
    issues::Issue,
};

use super::types::{
    CatalogPreview, ConfigDto, ConfigValues, ExtractMessagesParams, ExtractMessagesResult,
    GetConfigParams, IssueItem, MessageItem, Pagination, PreviewCatalogParams,
};

#[derive(Clone)]
pub struct IntlxMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for IntlxMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the whole project without touching the filesystem.
fn dry_run(project_root_path: &str) -> Result<ExtractionRun, McpError> {
    let project = ProjectContext::new(
        Path::new(project_root_path),
        &ConfigOverrides::default(),
        false,
    )
    .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

    project
        .extract_all(CatalogMode::DryRun)
        .map_err(|e| McpError::internal_error(format!("Extraction failed: {}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl IntlxMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current intlx configuration
    #[tool(description = "Get the current intlx configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List extracted message descriptors
    #[tool(
        description = "Extract message descriptors from the project's sources without writing anything. Returns a paginated list of messages, non-fatal issues, and the error that stopped extraction, if any."
    )]
    pub async fn extract_messages(
        &self,
        params: Parameters<ExtractMessagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let run = dry_run(&params.0.project_root_path)?;

        let mut files: BTreeSet<&str> = BTreeSet::new();
        let mut all_items: Vec<MessageItem> = Vec::new();
        for unit in &run.units {
            for m in &unit.messages {
                files.insert(unit.file_path.as_str());
                all_items.push(MessageItem {
                    file_path: unit.file_path.clone(),
                    id: m.id.clone(),
                    default_message: m.default_message.clone(),
                    description: m.description.clone(),
                });
            }
        }

        let total_count = all_items.len();
        let total_file_count = files.len();

        let paginated: Vec<MessageItem> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + paginated.len() < total_count;

        json_result(&ExtractMessagesResult {
            total_count,
            total_file_count,
            items: paginated,
            issues: run.issues.iter().map(IssueItem::from).collect(),
            error: run
                .failure
                .map(|failure| IssueItem::from(&Issue::ExtractFailure(failure))),
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Preview the catalog file
    #[tool(
        description = "Render the .properties catalog that `intlx extract` would write, namespace filter applied, without writing it."
    )]
    pub async fn preview_catalog(
        &self,
        params: Parameters<PreviewCatalogParams>,
    ) -> Result<CallToolResult, McpError> {
        let run = dry_run(&params.0.project_root_path)?;

        json_result(&CatalogPreview {
            catalog_path: run
                .catalog_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            entry_count: run.table.len(),
            content: run.table.render(),
            error: run
                .failure
                .map(|failure| IssueItem::from(&Issue::ExtractFailure(failure))),
        })
    }
}

#[tool_handler]
impl ServerHandler for IntlxMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "intlx MCP lets AI agents inspect react-intl message extraction.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. extract_messages - List extracted message descriptors (paginated)\n\
                 3. preview_catalog - Render the catalog file without writing it\n\n\
                 All tools are read-only. When extraction stops at an error, fix it\n\
                 first: messages from later files are missing until it is resolved."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = IntlxMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
