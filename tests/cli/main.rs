use std::{
    fs,
    path::PathBuf,
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod generate;
mod list;

const BIN_NAME: &str = "unity-constants";

pub const INPUT_MANAGER: &str = "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!13 &1
InputManager:
  m_ObjectHideFlags: 0
  serializedVersion: 2
  m_Axes:
  - serializedVersion: 3
    m_Name: Horizontal
    descriptiveName:
    negativeButton: left
    positiveButton: right
    type: 0
  - serializedVersion: 3
    m_Name: Vertical
    negativeButton: down
    positiveButton: up
    type: 0
  - serializedVersion: 3
    m_Name: Fire1
    positiveButton: left ctrl
    type: 0
  - serializedVersion: 3
    m_Name: Horizontal
    type: 2
  - serializedVersion: 3
    m_Name: Mouse ScrollWheel
    type: 1
";

pub const TAG_MANAGER: &str = "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!78 &1
TagManager:
  serializedVersion: 2
  tags:
  - Enemy Tag
  - Collectible
  layers:
  - Default
  - TransparentFX
  - Ignore Raycast
  -
  - Water
  - UI
  -
  -
  - 2nd Layer
  m_SortingLayers:
  - name: Default
    uniqueID: 0
    locked: 0
  - name: Background
    uniqueID: 2818713173
    locked: 0
  - name: Foreground
    uniqueID: 1183012911
    locked: 0
";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keep config discovery inside the temp project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A Unity project with the default settings fixtures.
    pub fn unity_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_input_manager(INPUT_MANAGER)?;
        test.write_tag_manager(TAG_MANAGER)?;
        Ok(test)
    }

    pub fn write_input_manager(&self, content: &str) -> Result<()> {
        self.write_file("ProjectSettings/InputManager.asset", content)
    }

    pub fn write_tag_manager(&self, content: &str) -> Result<()> {
        self.write_file("ProjectSettings/TagManager.asset", content)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn list_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("list");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }
}

/// Output of a finished command, decoded.
pub struct Run {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(mut cmd: Command) -> Result<Run> {
    let output = cmd.output()?;
    Ok(Run {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
    })
}
