use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

const GREETING: &str = r#"import { FormattedMessage } from "react-intl";
export const Greeting = () => (
  <FormattedMessage
    id="app.greeting"
    defaultMessage="Hello, {name}!"
    description="Greeting on the home page"
  />
);
"#;

const NAV: &str = r#"import { defineMessages } from "react-intl";
export const messages = defineMessages({
  about: { id: "nav.about", defaultMessage: "About us", description: "nav link" },
});
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(".intlxrc.json", r#"{ "messagesDir": "i18n" }"#)?;
    test.write_file("src/greeting.tsx", GREETING)?;
    test.write_file("src/nav.ts", NAV)?;
    Ok(test)
}

#[test]
fn test_extract_writes_catalog() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Extracted 2 messages from 2 source files
      wrote ./i18n/messages.properties (2 entries)

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("i18n/messages.properties")?,
        "# Greeting on the home page\napp.greeting = Hello, {name}!\n\n# nav link\nnav.about = About us\n"
    );
    Ok(())
}

#[test]
fn test_extract_without_messages_dir_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/greeting.tsx", GREETING)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\u{2713} Extracted 1 message from 1 source file\n"
    );
    assert!(!test.root().join("i18n").exists());
    Ok(())
}

#[test]
fn test_extract_stops_at_first_error() -> Result<()> {
    let test = project()?;
    test.write_file(
        "src/broken.tsx",
        r#"import { FormattedMessage } from "react-intl";
export const B = () => <FormattedMessage id="b.broken" defaultMessage="{open" />;
"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("error: Message failed to parse: "));
    assert!(stdout.contains("message-syntax"));
    assert!(stdout.contains("  --> ./src/broken.tsx:2:71\n"));
    assert!(stdout.contains("= hint: See: https://formatjs.io/docs/core-concepts/icu-syntax"));
    assert!(stdout.contains("1 problem (1 error, 0 warnings)"));
    assert!(!stdout.contains("Extracted"));

    // broken.tsx sorts first, so nothing was merged before the failure
    assert!(!test.root().join("i18n").exists());
    Ok(())
}

#[test]
fn test_extract_duplicate_id_across_files() -> Result<()> {
    let test = project()?;
    test.write_file(
        "src/other.tsx",
        r#"import { FormattedMessage } from "react-intl";
export const O = () => <FormattedMessage id="app.greeting" defaultMessage="Hi" />;
"#,
    )?;

    let output = test.extract_command().output()?;

    // Each unit has its own store: a different message under a known id
    // replaces the catalog entry instead of failing.
    assert!(output.status.success());
    let catalog = test.read_file("i18n/messages.properties")?;
    assert!(catalog.contains("app.greeting = Hi\n"));
    Ok(())
}

#[test]
fn test_extract_json_output() -> Result<()> {
    let test = project()?;

    let output = test.extract_command().arg("--json").output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    let units = json.as_array().unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0]["filePath"], "./src/greeting.tsx");
    assert_eq!(units[0]["messages"][0]["id"], "app.greeting");
    assert_eq!(
        units[0]["messages"][0]["description"],
        "Greeting on the home page"
    );
    assert_eq!(units[1]["messages"][0]["defaultMessage"], "About us");
    Ok(())
}

#[test]
fn test_extract_out_dir_rewrites_sources() -> Result<()> {
    let test = project()?;

    let output = test
        .extract_command()
        .args(["--out-dir", "build"])
        .output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("rewrote 2 source files"));

    assert_eq!(
        test.read_file("build/src/greeting.tsx")?,
        r#"import { FormattedMessage } from "react-intl";
export const Greeting = () => (
  <FormattedMessage
    id="app.greeting"
    defaultMessage="Hello, {name}!"
  />
);
"#
    );
    assert_eq!(
        test.read_file("build/src/nav.ts")?,
        r#"import { defineMessages } from "react-intl";
export const messages = defineMessages({
  about: { "id": "nav.about", "defaultMessage": "About us" },
});
"#
    );
    // Sources themselves are untouched.
    assert_eq!(test.read_file("src/greeting.tsx")?, GREETING);
    Ok(())
}

#[test]
fn test_extract_cli_overrides_config() -> Result<()> {
    let test = project()?;

    let output = test
        .extract_command()
        .args(["--messages-dir", "locales", "--file-name", "en"])
        .args(["--namespace", "nav"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("locales/en.properties")?,
        "# nav link\nnav.about = About us\n"
    );
    assert!(!test.root().join("i18n").exists());
    Ok(())
}

#[test]
fn test_extract_enforce_descriptions() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"import { FormattedMessage } from "react-intl";
export const A = () => <FormattedMessage id="app.bare" defaultMessage="Bare" />;
"#,
    )?;

    let output = test
        .extract_command()
        .arg("--enforce-descriptions")
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error: Message must have a `description`."));
    assert!(stdout.contains("= note: message id: app.bare"));
    Ok(())
}

#[test]
fn test_extract_plural_component_warns() -> Result<()> {
    let test = CliTest::with_file(
        "src/count.tsx",
        r#"import { FormattedPlural } from "react-intl";
export const C = ({ n }) => <FormattedPlural value={n} one="item" other="items" />;
"#,
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(
        "warning: Default messages are not extracted from <FormattedPlural>, use <FormattedMessage> instead."
    ));
    assert!(stdout.contains("1 problem (0 errors, 1 warning)"));
    assert!(stdout.contains("Extracted 0 messages from 1 source file"));
    Ok(())
}

#[test]
fn test_extract_reports_unparseable_file() -> Result<()> {
    let test = project()?;
    test.write_file("src/bad.tsx", "export const = ;\n")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("  --> ./src/bad.tsx\n"));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "warning: 1 file(s) could not be parsed (use -v for details)\n"
    );
    // The other units are still extracted.
    assert!(test.root().join("i18n/messages.properties").exists());
    Ok(())
}

#[test]
fn test_extract_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".intlxrc.json", r#"{ "fileName": "" }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
    Ok(())
}
