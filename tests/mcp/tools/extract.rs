use intlx::mcp::{IntlxMcpServer, types::ExtractMessagesParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, component_source, extract_tool_result_json, fixture_two_files};

fn params(
    fixture: &McpTestFixture,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<ExtractMessagesParams> {
    Parameters(ExtractMessagesParams {
        project_root_path: fixture.root(),
        limit,
        offset,
    })
}

#[tokio::test]
async fn test_extract_messages_lists_descriptors() {
    let fixture = fixture_two_files().unwrap();
    let server = IntlxMcpServer::new();

    let result = server
        .extract_messages(params(&fixture, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["totalFileCount"], 2);

    let items = json_result["items"].as_array().unwrap();
    let ids: Vec<_> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["a.title", "b.save", "b.cancel"]);
    assert_eq!(items[0]["description"], "page title");
    assert!(items[1].get("description").is_none());
    assert!(items[1]["filePath"].as_str().unwrap().ends_with("src/b.ts"));

    let issues = json_result["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["rule"], "plural-component");
    assert_eq!(issues[0]["severity"], "warning");
    assert!(json_result.get("error").is_none());
}

#[tokio::test]
async fn test_extract_messages_pagination() {
    let ids: Vec<String> = (0..25).map(|i| format!("msg.{:02}", i)).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let fixture =
        McpTestFixture::with_sources(vec![("src/many.tsx", &component_source(&id_refs))]).unwrap();
    let server = IntlxMcpServer::new();

    let first = extract_tool_result_json(
        &server
            .extract_messages(params(&fixture, None, None))
            .await
            .unwrap(),
    );
    assert_eq!(first["totalCount"], 25);
    assert_eq!(first["items"].as_array().unwrap().len(), 20);
    assert_eq!(
        first["pagination"],
        json!({ "offset": 0, "limit": 20, "hasMore": true })
    );

    let second = extract_tool_result_json(
        &server
            .extract_messages(params(&fixture, Some(10), Some(20)))
            .await
            .unwrap(),
    );
    let items = second["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["id"], "msg.20");
    assert_eq!(second["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_extract_messages_limit_is_capped() {
    let fixture = fixture_two_files().unwrap();
    let server = IntlxMcpServer::new();

    let result = extract_tool_result_json(
        &server
            .extract_messages(params(&fixture, Some(1000), None))
            .await
            .unwrap(),
    );
    assert_eq!(result["pagination"]["limit"], 100);
}

#[tokio::test]
async fn test_extract_messages_reports_fatal_error() {
    let fixture = fixture_two_files().unwrap();
    fixture
        .write_file(
            "src/0-broken.tsx",
            r#"import { defineMessages } from "react-intl";
export default defineMessages({ x: { id: "x" } });
"#,
        )
        .unwrap();
    let server = IntlxMcpServer::new();

    let result = extract_tool_result_json(
        &server
            .extract_messages(params(&fixture, None, None))
            .await
            .unwrap(),
    );

    // The broken file sorts first, so nothing else was extracted.
    assert_eq!(result["totalCount"], 0);
    assert_eq!(result["error"]["rule"], "missing-required-field");
    assert!(
        result["error"]["location"]
            .as_str()
            .unwrap()
            .ends_with("src/0-broken.tsx:2:36")
    );
}

#[tokio::test]
async fn test_extract_messages_writes_nothing() {
    let fixture = fixture_two_files().unwrap();
    fixture.write_config(&json!({ "messagesDir": "i18n" })).unwrap();
    let server = IntlxMcpServer::new();

    server
        .extract_messages(params(&fixture, None, None))
        .await
        .unwrap();
    assert!(!fixture.root_path().join("i18n").exists());
}
