//! Common test utilities for bastion-inventory integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Default output location relative to the working directory
pub const DEFAULT_INVENTORY: &str = "inventories/from_terraform.yml";

/// A temporary working directory for one test
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy an outputs fixture to `target` in the workspace
    pub fn copy_outputs_fixture(&self, fixture_name: &str, target: &str) {
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("outputs")
            .join(format!("{fixture_name}.json"));
        let content = std::fs::read_to_string(&fixture_path).expect("Failed to read fixture");
        self.write_file(target, &content);
    }

    /// Read and parse the generated inventory, skipping the comment header
    pub fn read_inventory(&self, path: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_file(path)).expect("Inventory is not valid YAML")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Inventory text without the comment header
#[allow(dead_code)]
pub fn strip_header(document: &str) -> String {
    document
        .lines()
        .skip_while(|line| line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Command for the real binary, isolated from the developer's environment
#[allow(deprecated)]
pub fn bastion_inventory_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bastion-inventory").unwrap();
    cmd.env_remove("ANSIBLE_SSH_KEY_PATH");
    cmd.env_remove("DO_SSH_KEY_PATH");
    cmd.env_remove("BASTION_INVENTORY_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside a test workspace
#[allow(dead_code)]
pub fn bastion_inventory_cmd_in(workspace: &TestWorkspace) -> Command {
    let mut cmd = bastion_inventory_cmd();
    cmd.current_dir(&workspace.path);
    cmd
}
