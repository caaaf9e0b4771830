use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const AXES: &str = "Assets/Unity Constants/Axes.cs";
const TAGS: &str = "Assets/Unity Constants/Tags.cs";
const SORTING_LAYERS: &str = "Assets/Unity Constants/SortingLayers.cs";
const LAYERS: &str = "Assets/Unity Constants/Layers.cs";

#[test]
fn test_generate_all_files() -> Result<()> {
    let test = CliTest::unity_project()?;

    let output = run(test.generate_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        "\u{2713} Generated Assets/Unity Constants/Axes.cs (4 constants)\n\
         \u{2713} Generated Assets/Unity Constants/Tags.cs (9 constants)\n\
         \u{2713} Generated Assets/Unity Constants/SortingLayers.cs (3 constants)\n\
         \u{2713} Generated Assets/Unity Constants/Layers.cs (6 constants)\n"
    );
    assert_eq!(output.stderr, "");

    assert_eq!(
        test.read_file(AXES)?,
        r#"// <auto-generated>
//     This code was generated by unity-constants.
//     Changes to this file will be lost when the code is regenerated.
// </auto-generated>

namespace UnityConstants
{
    public static class Axes
    {
        public const string Horizontal = "Horizontal";
        public const string Vertical = "Vertical";
        public const string Fire1 = "Fire1";
        public const string MouseScrollWheel = "Mouse ScrollWheel";
    }
}
"#
    );

    let tags = test.read_file(TAGS)?;
    assert!(tags.contains("public static class Tags"));
    assert!(tags.contains("public const string Untagged = \"Untagged\";"));
    assert!(tags.contains("public const string EnemyTag = \"Enemy Tag\";"));

    let layers = test.read_file(LAYERS)?;
    assert!(layers.contains("public const string IgnoreRaycast = \"Ignore Raycast\";"));
    assert!(layers.contains("public const string _2ndLayer = \"2nd Layer\";"));

    let sorting = test.read_file(SORTING_LAYERS)?;
    assert!(sorting.contains("public static class SortingLayers"));
    assert!(sorting.contains("public const string Foreground = \"Foreground\";"));

    Ok(())
}

#[test]
fn test_generate_selected_categories() -> Result<()> {
    let test = CliTest::unity_project()?;

    let mut cmd = test.generate_command();
    cmd.args(["layers", "tags"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Generated Assets/Unity Constants/Layers.cs (6 constants)\n\
         \u{2713} Generated Assets/Unity Constants/Tags.cs (9 constants)\n"
    );
    assert!(!test.exists(AXES));
    assert!(!test.exists(SORTING_LAYERS));

    Ok(())
}

#[test]
fn test_generate_skips_empty_category() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_tag_manager(
        "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!78 &1
TagManager:
  tags: []
  layers:
  - Default
  m_SortingLayers: []
",
    )?;

    let mut cmd = test.generate_command();
    cmd.arg("sorting-layers");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "- Skipped Assets/Unity Constants/SortingLayers.cs: no sorting layers found\n"
    );
    assert!(!test.exists(SORTING_LAYERS));
    assert!(!test.exists("Assets/Unity Constants"));

    Ok(())
}

#[test]
fn test_generate_duplicate_identifier_fails_only_that_file() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_tag_manager(
        "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!78 &1
TagManager:
  tags:
  - Water!
  - Water?
  layers:
  - Default
  m_SortingLayers:
  - name: Default
",
    )?;
    test.write_file(TAGS, "// hand-written\n")?;

    let output = run(test.generate_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains(
        "\u{2718} Failed Assets/Unity Constants/Tags.cs: \"Water!\" and \"Water?\" both map to the identifier `Water_`"
    ));
    assert!(output.stdout.contains("Generated Assets/Unity Constants/Axes.cs"));
    assert!(output.stdout.contains("Generated Assets/Unity Constants/Layers.cs (1 constant)"));
    assert_eq!(test.read_file(TAGS)?, "// hand-written\n");

    Ok(())
}

#[test]
fn test_generate_missing_settings_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_tag_manager(crate::TAG_MANAGER)?;

    let output = run(test.generate_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("Failed Assets/Unity Constants/Axes.cs: failed to read"));
    assert!(output.stdout.contains("InputManager.asset"));
    assert!(output.stdout.contains("Generated Assets/Unity Constants/Tags.cs"));
    assert!(!test.exists(AXES));

    Ok(())
}

#[test]
fn test_generate_binary_settings_file() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_input_manager("\u{0}\u{0}\u{0}binary")?;

    let mut cmd = test.generate_command();
    cmd.arg("axes");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("is not a text asset"));

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::unity_project()?;

    run(test.generate_command())?;
    let first = test.read_file(TAGS)?;
    run(test.generate_command())?;
    let second = test.read_file(TAGS)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_generate_check_mode() -> Result<()> {
    let test = CliTest::unity_project()?;

    let mut cmd = test.generate_command();
    cmd.args(["axes", "--check"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "\u{2718} Assets/Unity Constants/Axes.cs is out of date\n\
         1 file(s) out of date. Run unity-constants generate to update them.\n"
    );
    assert!(!test.exists(AXES));

    run(test.generate_command())?;

    let mut cmd = test.generate_command();
    cmd.args(["axes", "--check"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Assets/Unity Constants/Axes.cs is up to date\n"
    );

    Ok(())
}

#[test]
fn test_generate_without_namespace() -> Result<()> {
    let test = CliTest::unity_project()?;

    let mut cmd = test.generate_command();
    cmd.args(["axes", "--no-namespace"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));

    let axes = test.read_file(AXES)?;
    assert!(!axes.contains("namespace"));
    assert!(axes.contains("\npublic static class Axes\n{\n    public const string Horizontal"));

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_file(
        ".unity-constants.json",
        r#"{
            "namespace": "Game.Constants",
            "outputDir": "Scripts/Generated",
            "files": { "sortingLayers": "Sorting Layers.cs" }
        }"#,
    )?;

    let mut cmd = test.generate_command();
    cmd.arg("sorting-layers");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        "\u{2713} Generated Assets/Scripts/Generated/Sorting Layers.cs (3 constants)\n"
    );
    let content = test.read_file("Assets/Scripts/Generated/Sorting Layers.cs")?;
    assert!(content.contains("namespace Game.Constants\n"));
    assert!(content.contains("public static class SortingLayers\n"));

    Ok(())
}

#[test]
fn test_namespace_flag_overrides_config() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_file(".unity-constants.json", r#"{ "namespace": "FromConfig" }"#)?;

    let mut cmd = test.generate_command();
    cmd.args(["tags", "--namespace", "FromFlag"]);
    run(cmd)?;

    let tags = test.read_file(TAGS)?;
    assert!(tags.contains("namespace FromFlag\n"));
    Ok(())
}

#[test]
fn test_generate_invalid_namespace_is_error() -> Result<()> {
    let test = CliTest::unity_project()?;

    let mut cmd = test.generate_command();
    cmd.args(["--namespace", "My Game"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid 'namespace'"));
    assert!(!test.exists("Assets"));

    Ok(())
}

#[test]
fn test_generate_outside_unity_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.generate_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: "));
    assert!(output.stderr.contains("is not a Unity project"));
    assert_eq!(output.stdout, "");

    Ok(())
}

#[test]
fn test_generate_with_project_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("game/ProjectSettings/InputManager.asset", crate::INPUT_MANAGER)?;

    let mut cmd = test.generate_command();
    cmd.args(["axes", "--project", "game"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_eq!(
        output.stdout,
        "\u{2713} Generated Assets/Unity Constants/Axes.cs (4 constants)\n"
    );
    assert!(test.exists("game/Assets/Unity Constants/Axes.cs"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_generate_runs_refresh_command() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_file(
        ".unity-constants.json",
        r#"{ "refreshCommand": ["sh", "-c", "echo \"$1\" >> refresh.log", "sh"] }"#,
    )?;

    let mut cmd = test.generate_command();
    cmd.args(["tags", "layers"]);
    cmd.env("PATH", std::env::var("PATH").unwrap_or_default());
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    let log = test.read_file("refresh.log")?;
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("Tags.cs"));
    assert!(lines[1].ends_with("Layers.cs"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_generate_refresh_failure_is_warning() -> Result<()> {
    let test = CliTest::unity_project()?;
    test.write_file(
        ".unity-constants.json",
        r#"{ "refreshCommand": ["sh", "-c", "exit 3"] }"#,
    )?;

    let mut cmd = test.generate_command();
    cmd.arg("tags");
    cmd.env("PATH", std::env::var("PATH").unwrap_or_default());
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Generated Assets/Unity Constants/Tags.cs"));
    assert!(output.stderr.contains("warning: failed to refresh Assets/Unity Constants/Tags.cs"));
    assert!(test.exists(TAGS));

    Ok(())
}
