use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "res/values/strings.xml",
        r#"<resources>
    <string name="hello">Hello</string>
    <string name="version" translatable="false">1.0</string>
</resources>"#,
    )?;
    test.write_file(
        "res/values-fr/strings.xml",
        r#"<resources><string name="hello">Bonjour</string></resources>"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("'fr' was processed (1 translated)\n"));
    // check never writes an artifact
    assert!(test.csv_files("")?.is_empty());

    Ok(())
}

#[test]
fn test_check_missing_keys_fails() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file("res/values-fr/strings.xml", "<resources/>")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout(&output);
    assert!(stdout.contains("'fr' was processed (0 translated) with MISSED KEYS - 5"));
    for key in ["apples#one", "apples#other", "colors[0]", "ok", "title"] {
        assert!(stdout.contains(&format!("      {}\n", key)), "missing {key}");
    }
    // base-only and reference keys are not reported
    assert!(!stdout.contains("app_name"));
    assert!(!stdout.contains("colors[1]"));
    assert!(stdout.contains("5 missing keys, 0 skipped locales"));

    Ok(())
}

#[test]
fn test_check_duplicate_locale_key_fails() -> Result<()> {
    let test = CliTest::with_file(
        "res/values/strings.xml",
        r#"<resources><string name="hello">Hello</string></resources>"#,
    )?;
    test.write_file(
        "res/values-fr/strings.xml",
        r#"<resources>
    <string name="hello">Bonjour</string>
    <string name="hello">Salut</string>
</resources>"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("'fr' was skipped: duplicate key 'hello'"));

    Ok(())
}

#[test]
fn test_check_verbose_logs_extra_keys() -> Result<()> {
    let test = CliTest::with_file(
        "res/values/strings.xml",
        r#"<resources><string name="hello">Hello</string></resources>"#,
    )?;
    test.write_file(
        "res/values-fr/strings.xml",
        r#"<resources>
    <string name="hello">Bonjour</string>
    <string name="legacy">Ancien</string>
</resources>"#,
    )?;

    let output = test.check_command().arg("-v").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("note: 'legacy' is not in the default language"));
    assert!(stderr(&output).contains("key not in base"));

    Ok(())
}

#[test]
fn test_check_json() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file("res/values-fr/strings.xml", "<resources/>")?;

    let output = test.check_command().args(["--format", "json"]).output()?;
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(json.get("outputs").is_none());
    assert_eq!(json["files"][0]["baseKeys"], 7);
    assert_eq!(json["files"][0]["locales"][0]["suppressed"], 1);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("export"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("init"));

    Ok(())
}
