use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const FR_STRINGS: &str = r#"<resources>
    <string name="title">Bienvenue</string>
    <plurals name="apples">
        <item quantity="one">%d pomme</item>
    </plurals>
    <string-array name="colors">
        <item>Rouge</item>
    </string-array>
</resources>
"#;

#[test]
fn test_export_writes_sheet() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file("res/values-fr/strings.xml", FR_STRINGS)?;

    let output = test.export_command().args(["-o", "out"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let csv = test.read_file("out.csv")?;
    assert_eq!(
        csv,
        "KEY,default,Untranslatable,fr\n\
         /** Main screen **/,,,\n\
         app_name,Langsheet,✓,✓\n\
         title,Welcome,,Bienvenue\n\
         \"/** Buttons, shared **/\",,,\n\
         ok,OK,,MISSING\n\
         //plurals: apples,,,\n\
         apples#one,%d apple,,%d pomme\n\
         apples#other,%d apples,,MISSING\n\
         colors[0],Red,,Rouge\n\
         colors[1],@string/ok,✓,✓\n"
    );

    let stdout = stdout(&output);
    assert!(stdout.contains("strings.xml (7 keys)"));
    assert!(stdout.contains("'fr' was processed (3 translated) with MISSED KEYS - 2"));
    assert!(stdout.contains("      apples#other\n      ok\n"));
    assert!(stdout.contains("Wrote out.csv"));

    Ok(())
}

#[test]
fn test_export_default_output_name() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file("res/values-de/strings.xml", "<resources/>")?;

    let output = test.export_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let files = test.csv_files("exported_strings_")?;
    assert_eq!(files.len(), 1);
    let millis = files[0]
        .trim_start_matches("exported_strings_")
        .trim_end_matches(".csv");
    assert!(millis.parse::<i64>().is_ok(), "unexpected name: {}", files[0]);

    Ok(())
}

#[test]
fn test_export_locales_sorted_and_complete() -> Result<()> {
    let test = CliTest::with_file(
        "src/main/res/values/strings.xml",
        r#"<resources><string name="hello">Hello</string></resources>"#,
    )?;
    test.write_file(
        "src/main/res/values-fr/strings.xml",
        r#"<resources><string name="hello">Bonjour</string></resources>"#,
    )?;
    test.write_file(
        "src/main/res/values-de/strings.xml",
        r#"<resources><string name="hello">Hallo</string></resources>"#,
    )?;
    // no strings.xml: contributes no column
    test.write_file("src/main/res/values-it/arrays.xml", "<resources/>")?;

    let output = test.export_command().args(["-o", "out.csv"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("out.csv")?,
        "KEY,default,Untranslatable,de,fr\nhello,Hello,,Hallo,Bonjour\n"
    );
    let stdout = stdout(&output);
    assert!(stdout.contains("'de' was processed (1 translated)\n"));
    assert!(stdout.contains("'fr' was processed (1 translated)\n"));
    assert!(stdout.contains("Processed 1 file, 2 locales - no missing keys"));

    Ok(())
}

#[test]
fn test_export_extra_files_get_own_sheet() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file(
        "res/values/arrays.xml",
        r#"<resources><string-array name="sizes"><item>Small</item></string-array></resources>"#,
    )?;
    test.write_file(
        "res/values-fr/arrays.xml",
        r#"<resources><string-array name="sizes"><item>Petit</item></string-array></resources>"#,
    )?;

    let output = test
        .export_command()
        .args(["-o", "out.csv", "--file", "arrays.xml"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // eligible files follow the configured order
    assert!(test.read_file("out.csv")?.starts_with("KEY,default,Untranslatable\n"));
    assert_eq!(
        test.read_file("out_arrays.csv")?,
        "KEY,default,Untranslatable,fr\nsizes[0],Small,,Petit\n"
    );
    assert!(!test.root().join("out_strings.csv").exists());

    Ok(())
}

#[test]
fn test_export_ignored_keys() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file("res/values-fr/strings.xml", FR_STRINGS)?;

    let output = test
        .export_command()
        .args(["-o", "out.csv", "--ignore", "ok", "--ignore", "apples"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let csv = test.read_file("out.csv")?;
    assert!(!csv.contains("\nok,"));
    assert!(!csv.contains("apples"));

    // the locale still defines the ignored plural
    let stdout = stdout(&output);
    assert!(stdout.contains("'fr' was processed (2 translated)\n"));
    assert!(!stdout.contains("apples"));
    assert!(!stdout.contains("note:"));

    Ok(())
}

#[test]
fn test_export_config_file_ignored_keys() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file("res/values-fr/strings.xml", FR_STRINGS)?;
    test.write_file(
        ".langsheetrc.json",
        r#"{ "ignoredKeys": ["ok", "apples"] }"#,
    )?;

    let output = test.export_command().args(["-o", "out.csv"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("'fr' was processed (2 translated)\n"));

    Ok(())
}

#[test]
fn test_export_skips_malformed_locale() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file("res/values-fr/strings.xml", FR_STRINGS)?;
    test.write_file("res/values-es/strings.xml", "<resources><string name=\"ok\">")?;

    let output = test.export_command().args(["-o", "out.csv"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains("'es' was skipped: malformed resource file"));
    assert!(stdout.contains("'fr' was processed (3 translated) with MISSED KEYS - 2"));
    assert!(test.read_file("out.csv")?.starts_with("KEY,default,Untranslatable,fr\n"));

    Ok(())
}

#[test]
fn test_export_malformed_base_fails() -> Result<()> {
    let test = CliTest::with_file("res/values/strings.xml", "<resources><string name=\"a\">")?;
    test.write_file("res/values-fr/strings.xml", "<resources/>")?;

    let output = test.export_command().args(["-o", "out.csv"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("malformed resource file"));
    assert!(!test.root().join("out.csv").exists());

    Ok(())
}

#[test]
fn test_export_unresolved_directory() -> Result<()> {
    let test = CliTest::with_file("app/build.gradle", "")?;

    let output = test.export_command().args(["-o", "out.csv"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("cannot find resource directory"));
    assert!(test.csv_files("")?.is_empty());

    Ok(())
}

#[test]
fn test_export_missing_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["export", "does-not-exist"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("project directory not found"));

    Ok(())
}

#[test]
fn test_export_json_report() -> Result<()> {
    let test = CliTest::android()?;
    test.write_file("res/values-fr/strings.xml", FR_STRINGS)?;

    let output = test
        .export_command()
        .args(["-o", "out.csv", "--format", "json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["outputs"][0], "out.csv");
    let fr = &json["files"][0]["locales"][0];
    assert_eq!(fr["locale"], "fr");
    assert_eq!(fr["translated"], 3);
    assert_eq!(fr["missing"], serde_json::json!(["apples#other", "ok"]));
    assert_eq!(fr["suppressed"], 1);

    Ok(())
}
