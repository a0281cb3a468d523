use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a `src/` directory.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Keep the config search inside the project.
        fs::create_dir_all(project_root.join(".git"))?;
        fs::create_dir_all(project_root.join("src"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with source files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_sources(vec![
    ///     ("src/app.tsx", r#"<FormattedMessage id="a" defaultMessage="A" />"#),
    /// ])?;
    /// ```
    pub fn with_sources(files: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in files {
            fixture.write_file(path, content)?;
        }
        Ok(fixture)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .intlxrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".intlxrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// A component file with one descriptor per id, in order.
pub fn component_source(ids: &[&str]) -> String {
    let mut source = String::from("import { FormattedMessage } from \"react-intl\";\n");
    for (i, id) in ids.iter().enumerate() {
        source.push_str(&format!(
            "export const M{} = () => <FormattedMessage id=\"{}\" defaultMessage=\"Text {}\" />;\n",
            i, id, i
        ));
    }
    source
}

/// A project with two component files and a plural component warning.
pub fn fixture_two_files() -> Result<McpTestFixture> {
    McpTestFixture::with_sources(vec![
        (
            "src/a.tsx",
            r#"import { FormattedMessage, FormattedPlural } from "react-intl";
export const A = () => (
  <>
    <FormattedMessage id="a.title" defaultMessage="Title" description="page title" />
    <FormattedPlural value={2} one="one" other="many" />
  </>
);
"#,
        ),
        (
            "src/b.ts",
            r#"import { defineMessages } from "react-intl";
export default defineMessages({
  save: { id: "b.save", defaultMessage: "Save" },
  cancel: { id: "b.cancel", defaultMessage: "Cancel" },
});
"#,
        ),
    ])
}

/// Extract the JSON payload of a successful tool call.
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
