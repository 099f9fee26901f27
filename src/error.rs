//! Error types and handling for bastion-inventory
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes and help text.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for inventory generation
#[derive(Error, Diagnostic, Debug)]
pub enum InventoryError {
    // Input errors
    #[error("{path} not found")]
    #[diagnostic(
        code(bastion_inventory::input::not_found),
        help("Export the outputs first, e.g. 'terraform output -json > terraform_outputs.json'")
    )]
    InputNotFound { path: String },

    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(bastion_inventory::input::read_failed))]
    InputReadFailed { path: String, reason: String },

    #[error("Malformed Terraform outputs in {path}: {reason}")]
    #[diagnostic(
        code(bastion_inventory::input::malformed),
        help("The outputs file must be a JSON object as produced by 'terraform output -json'")
    )]
    MalformedInput { path: String, reason: String },

    // SSH errors
    #[error("Expected SSH key not found at {path}")]
    #[diagnostic(
        code(bastion_inventory::ssh::key_missing),
        help(
            "Ensure your deployment key is available before running Ansible, pass --ssh-key, \
             set ANSIBLE_SSH_KEY_PATH, or use --strategy agent-forwarding"
        )
    )]
    KeyFileMissing { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(bastion_inventory::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(bastion_inventory::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(bastion_inventory::config::invalid))]
    ConfigInvalid { message: String },

    // Output errors
    #[error("Failed to render inventory: {reason}")]
    #[diagnostic(code(bastion_inventory::output::render_failed))]
    RenderFailed { reason: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(bastion_inventory::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bastion_inventory::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for InventoryError {
    fn from(err: serde_yaml::Error) -> Self {
        InventoryError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::MalformedInput {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InventoryError>;
