use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_list_aligns_identifiers() -> Result<()> {
    let test = CliTest::unity_project()?;

    let mut cmd = test.list_command();
    cmd.args(["sorting-layers", "axes"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        r#"sorting layers (3)
  Default    = "Default"
  Background = "Background"
  Foreground = "Foreground"

input axes (4)
  Horizontal       = "Horizontal"
  Vertical         = "Vertical"
  Fire1            = "Fire1"
  MouseScrollWheel = "Mouse ScrollWheel"
"#
    );

    Ok(())
}

#[test]
fn test_list_writes_nothing() -> Result<()> {
    let test = CliTest::unity_project()?;

    let output = run(test.list_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("tags (9)\n  Untagged "));
    assert!(output.stdout.contains("layers (6)\n"));
    assert!(!test.exists("Assets"));

    Ok(())
}

#[test]
fn test_list_empty_category() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_tag_manager(
        "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!78 &1
TagManager:
  tags: []
  layers: []
  m_SortingLayers: []
",
    )?;

    let mut cmd = test.list_command();
    cmd.arg("layers");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "layers: none found\n");

    Ok(())
}

#[test]
fn test_list_reports_duplicates() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_tag_manager(
        "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!78 &1
TagManager:
  tags: []
  layers:
  - Ignore Raycast
  - Ignore raycast
  m_SortingLayers: []
",
    )?;

    let mut cmd = test.list_command();
    cmd.arg("layers");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "\u{2718} layers: \"Ignore Raycast\" and \"Ignore raycast\" both map to the identifier `IgnoreRaycast`\n"
    );

    Ok(())
}
