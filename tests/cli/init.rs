use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["extensions"], serde_json::json!(["sas", "inc", "mac"]));
    assert_eq!(parsed["transientLibrary"], "work");
    assert_eq!(parsed["nullDataset"], "_null_");
    assert_eq!(parsed["recursive"], false);
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".dsscanrc.json").exists());

    let content = test.read_file(".dsscanrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_in_given_directory() -> Result<()> {
    let test = CliTest::with_file("jobs/load.sas", "data lib.a;\n")?;

    assert_cmd_snapshot!(test.command().args(["init", "jobs"]));

    assert!(test.root().join("jobs/.dsscanrc.json").exists());
    assert!(!test.root().join(".dsscanrc.json").exists());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dsscanrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert_eq!(test.read_file(".dsscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("load.sas", "data lib1.sales; set work.temp; run;\n")?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("lib1.sales"));

    Ok(())
}
