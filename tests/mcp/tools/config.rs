use intlx::mcp::{IntlxMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = IntlxMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["moduleSourceName"], "react-intl");
    assert_eq!(json_result["config"]["fileName"], "messages");
    assert!(json_result["config"]["messagesDir"].is_null());
    assert_eq!(
        json_result["config"]["componentNames"],
        json!(["FormattedMessage", "FormattedHTMLMessage"])
    );
}

#[tokio::test]
async fn test_get_config_from_rc_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "messagesDir": "i18n",
            "namespace": "app",
            "enforceDescriptions": true
        }))
        .unwrap();

    let server = IntlxMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["messagesDir"], "i18n");
    assert_eq!(json_result["config"]["namespace"], "app");
    assert_eq!(json_result["config"]["enforceDescriptions"], true);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "fileName": "" })).unwrap();

    let server = IntlxMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
