use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["ignoredKeys"], serde_json::json!([]));
    assert_eq!(parsed["resourceFiles"], serde_json::json!(["strings.xml"]));
    assert_eq!(
        parsed["resourceDirs"],
        serde_json::json!(["res", "src/main/res"])
    );
    assert_eq!(parsed["baseDir"], "values");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .langsheetrc.json"));

    assert!(test.root().join(".langsheetrc.json").exists());
    let content = test.read_file(".langsheetrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsheetrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(".langsheetrc.json already exists"));
    assert_eq!(test.read_file(".langsheetrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "res/values/strings.xml",
        r#"<resources><string name="hello">Hello</string></resources>"#,
    )?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stdout: {}",
        stdout(&output)
    );

    Ok(())
}
