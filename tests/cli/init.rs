use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\u{2713} Created .intlxrc.json\n"
    );

    let content = test.read_file(".intlxrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["moduleSourceName"], "react-intl");
    assert_eq!(parsed["fileName"], "messages");
    assert!(parsed["includes"].is_array());
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".intlxrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: .intlxrc.json already exists\n"
    );
    assert_eq!(test.read_file(".intlxrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file(
        "src/app.tsx",
        r#"import { FormattedMessage } from "react-intl";
export const App = () => <FormattedMessage id="app.title" defaultMessage="Title" />;
"#,
    )?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "extract should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
