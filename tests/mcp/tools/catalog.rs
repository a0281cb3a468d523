use intlx::mcp::{IntlxMcpServer, types::PreviewCatalogParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{extract_tool_result_json, fixture_two_files};

#[tokio::test]
async fn test_preview_catalog_renders_sorted_entries() {
    let fixture = fixture_two_files().unwrap();
    fixture.write_config(&json!({ "messagesDir": "i18n" })).unwrap();
    let server = IntlxMcpServer::new();

    let result = server
        .preview_catalog(Parameters(PreviewCatalogParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["entryCount"], 3);
    assert_eq!(
        json_result["content"],
        "# page title\na.title = Title\n\n#\nb.cancel = Cancel\n\n#\nb.save = Save\n"
    );
    assert!(
        json_result["catalogPath"]
            .as_str()
            .unwrap()
            .ends_with("i18n/messages.properties")
    );
    assert!(!fixture.root_path().join("i18n").exists());
}

#[tokio::test]
async fn test_preview_catalog_applies_namespace() {
    let fixture = fixture_two_files().unwrap();
    fixture.write_config(&json!({ "namespace": "b" })).unwrap();
    let server = IntlxMcpServer::new();

    let result = server
        .preview_catalog(Parameters(PreviewCatalogParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["entryCount"], 2);
    assert_eq!(
        json_result["content"],
        "#\nb.cancel = Cancel\n\n#\nb.save = Save\n"
    );
    assert!(json_result.get("catalogPath").is_none());
}
